use crate::shared::{FieldSchema, FieldSpec, ImageSlot, MediaAccept, ResourceDescriptor};

pub const PAGE_TITLE: &str = "pageTitle";
pub const DESCRIPTION: &str = "description";
pub const ACTIVE: &str = "active";

/// Витрина (страница 10): заголовок, описание, флаг активности и главное изображение
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::singleton(
        "showcase",
        "Showcase",
        "/api/site-showcase-two/showcase-two",
        FieldSchema::new(vec![
            FieldSpec::text(PAGE_TITLE, "Page Title").required(),
            FieldSpec::long_text(DESCRIPTION, "Description"),
            FieldSpec::flag(ACTIVE, "Active"),
        ]),
    )
    .with_image(ImageSlot {
        form_field: "mainImage",
        response_key: "mainImageUrl",
        accept: MediaAccept::Images,
        required: false,
    })
}
