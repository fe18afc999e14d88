use crate::shared::{FieldSchema, FieldSpec, ImageSlot, MediaAccept, ResourceDescriptor};

pub const NAME: &str = "name";
pub const CATEGORY: &str = "category";
pub const DESCRIPTION: &str = "description";

/// Товары каталога (`/api/products`)
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "products",
        "Product",
        "/api/products",
        "products",
        "product",
        FieldSchema::new(vec![
            FieldSpec::text(NAME, "Product Name")
                .required()
                .searchable()
                .placeholder("Type Product Name.."),
            FieldSpec::text(CATEGORY, "Category").placeholder("Seeds, dried leaves, dried flowers.."),
            FieldSpec::long_text(DESCRIPTION, "Description")
                .required()
                .searchable()
                .placeholder("Type Product Description.."),
        ]),
    )
    .with_image(ImageSlot {
        form_field: "image",
        response_key: "image",
        accept: MediaAccept::Images,
        required: false,
    })
}
