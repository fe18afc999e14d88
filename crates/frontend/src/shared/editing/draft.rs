use contracts::shared::{Entity, EntityId, FieldError, FieldSchema, FieldValue, ImageRef};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The resource never loaded, so there is nothing to edit yet
    #[error("editing is unavailable until the data loads")]
    NotEditable,

    #[error("changes are locked while the save is in progress")]
    SaveInFlight,
}

/// Client-local copy of one entity plus the last state known to the server.
///
/// `fields` and `snapshot` always hold exactly the schema's declared fields,
/// so dirtiness is a plain comparison of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraftState {
    schema: FieldSchema,
    id: Option<EntityId>,
    fields: BTreeMap<String, FieldValue>,
    snapshot: BTreeMap<String, FieldValue>,
    image: Option<ImageRef>,
}

impl FormDraftState {
    /// Empty draft for a create in progress
    pub fn new(schema: FieldSchema) -> Self {
        let defaults = schema.defaults();
        Self {
            schema,
            id: None,
            fields: defaults.clone(),
            snapshot: defaults,
            image: None,
        }
    }

    pub fn load(&mut self, entity: &Entity) {
        let projected = self.schema.project(&entity.fields);
        self.id = entity.id.clone();
        self.fields = projected.clone();
        self.snapshot = projected;
        self.image = entity.image.clone();
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), DraftError> {
        if !self.schema.contains(name) {
            return Err(DraftError::UnknownField(name.to_string()));
        }
        self.fields.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn is_dirty(&self) -> bool {
        self.fields != self.snapshot
    }

    pub fn validate(&self) -> Vec<FieldError> {
        self.schema.validate(&self.fields)
    }

    pub fn validate_field(&self, name: &str) -> Option<FieldError> {
        self.schema
            .get(name)
            .and_then(|spec| spec.check(self.fields.get(name)))
    }

    /// Adopt the server's representation as the new clean state
    pub fn commit(&mut self, entity: &Entity) {
        self.load(entity);
    }

    pub fn reset(&mut self) {
        self.fields = self.snapshot.clone();
    }

    /// Current draft as an entity, carrying the persisted image
    pub fn to_entity(&self) -> Entity {
        Entity {
            id: self.id.clone(),
            fields: self.fields.clone(),
            image: self.image.clone(),
        }
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }
}
