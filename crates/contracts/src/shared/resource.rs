use serde_json::Value;

use super::entity::Entity;
use super::envelope::{unwrap_envelope, EnvelopeError, Payload};
use super::schema::FieldSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceShape {
    /// A list of records addressed as `{path}/{id}`
    Collection,
    /// One record living at `{path}` (page intro, site info)
    Singleton,
}

/// How a single record of a collection is fetched for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOne {
    ById,
    /// The backend has no item endpoint: list and pick the id
    FromList,
}

/// Where an update goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRoute {
    /// `PUT {path}/{id}`
    ById,
    /// `PUT {path}` with the id carried in the body under `id_key`
    Shared {
        path: &'static str,
        id_key: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAccept {
    Images,
    ImagesAndVideos,
}

impl MediaAccept {
    pub fn admits(&self, media_type: &str) -> bool {
        let media_type = media_type.trim().to_ascii_lowercase();
        match self {
            MediaAccept::Images => media_type.starts_with("image/"),
            MediaAccept::ImagesAndVideos => {
                media_type.starts_with("image/") || media_type.starts_with("video/")
            }
        }
    }

    /// Value for the `accept` attribute of a file input
    pub fn input_accept(&self) -> &'static str {
        match self {
            MediaAccept::Images => "image/*",
            MediaAccept::ImagesAndVideos => "image/*,video/*",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            MediaAccept::Images => "an image",
            MediaAccept::ImagesAndVideos => "an image or a video",
        }
    }
}

/// Image attached to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot {
    /// Multipart field name on upload
    pub form_field: &'static str,
    /// Key holding the stored URL in responses
    pub response_key: &'static str,
    pub accept: MediaAccept,
    /// New records cannot be created without a file
    pub required: bool,
}

/// Endpoint + schema of one editable resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    /// Human-readable singular name ("Product")
    pub title: &'static str,
    pub path: &'static str,
    pub plural_key: &'static str,
    pub singular_key: &'static str,
    pub shape: ResourceShape,
    pub fetch_one: FetchOne,
    pub update: UpdateRoute,
    pub schema: FieldSchema,
    pub image: Option<ImageSlot>,
}

impl ResourceDescriptor {
    pub fn collection(
        name: &'static str,
        title: &'static str,
        path: &'static str,
        plural_key: &'static str,
        singular_key: &'static str,
        schema: FieldSchema,
    ) -> Self {
        Self {
            name,
            title,
            path,
            plural_key,
            singular_key,
            shape: ResourceShape::Collection,
            fetch_one: FetchOne::ById,
            update: UpdateRoute::ById,
            schema,
            image: None,
        }
    }

    pub fn singleton(
        name: &'static str,
        title: &'static str,
        path: &'static str,
        schema: FieldSchema,
    ) -> Self {
        Self {
            name,
            title,
            path,
            plural_key: "",
            singular_key: "",
            shape: ResourceShape::Singleton,
            fetch_one: FetchOne::ById,
            update: UpdateRoute::ById,
            schema,
            image: None,
        }
    }

    pub fn with_image(mut self, slot: ImageSlot) -> Self {
        self.image = Some(slot);
        self
    }

    pub fn with_fetch_one(mut self, fetch_one: FetchOne) -> Self {
        self.fetch_one = fetch_one;
        self
    }

    pub fn with_update(mut self, update: UpdateRoute) -> Self {
        self.update = update;
        self
    }

    pub fn is_singleton(&self) -> bool {
        self.shape == ResourceShape::Singleton
    }

    pub fn unwrap(&self, body: Value) -> Payload {
        unwrap_envelope(body, self.plural_key, self.singular_key)
    }

    pub fn decode(&self, value: &Value) -> Result<Entity, EnvelopeError> {
        Entity::from_json(value, self.image.map(|slot| slot.response_key))
    }

    pub fn decode_many(&self, body: Value) -> Result<Vec<Entity>, EnvelopeError> {
        self.unwrap(body)
            .into_many(self.name)?
            .iter()
            .map(|value| self.decode(value))
            .collect()
    }

    pub fn decode_one(&self, body: Value) -> Result<Entity, EnvelopeError> {
        let value = self.unwrap(body).into_one(self.name)?;
        self.decode(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::schema::FieldSpec;
    use serde_json::json;

    fn products() -> ResourceDescriptor {
        ResourceDescriptor::collection(
            "products",
            "Product",
            "/api/products",
            "products",
            "product",
            FieldSchema::new(vec![FieldSpec::text("name", "Name").required()]),
        )
        .with_image(ImageSlot {
            form_field: "image",
            response_key: "image",
            accept: MediaAccept::Images,
            required: false,
        })
    }

    #[test]
    fn test_decode_many_from_wrapper() {
        let list = products()
            .decode_many(json!({"products": [{"_id": "1", "name": "Anise", "image": "/a.png"}]}))
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text("name"), "Anise");
        assert_eq!(list[0].image.as_ref().map(|i| i.src()), Some("/a.png"));
    }

    #[test]
    fn test_decode_one_from_wrapper() {
        let product = products()
            .decode_one(json!({"product": {"id": "2", "name": "Basil"}}))
            .unwrap();
        assert_eq!(product.id.map(|id| id.to_string()), Some("2".to_string()));
    }

    #[test]
    fn test_media_accept() {
        assert!(MediaAccept::Images.admits("image/jpeg"));
        assert!(!MediaAccept::Images.admits("video/mp4"));
        assert!(MediaAccept::ImagesAndVideos.admits("VIDEO/MP4"));
        assert!(!MediaAccept::ImagesAndVideos.admits("application/pdf"));
    }
}
