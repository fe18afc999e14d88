use crate::shared::{FieldSchema, FieldSpec, ResourceDescriptor};

pub const PAGE_TITLE: &str = "pageTitle";
pub const DESCRIPTION: &str = "description";
pub const ADDRESS: &str = "address";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";

/// Контактная информация сайта (`/api/contact-us/site-info`)
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::singleton(
        "contact_info",
        "Contact information",
        "/api/contact-us/site-info",
        FieldSchema::new(vec![
            FieldSpec::text(PAGE_TITLE, "Page Title").required(),
            FieldSpec::long_text(DESCRIPTION, "Description"),
            FieldSpec::text(ADDRESS, "Address").required(),
            FieldSpec::text(PHONE, "Phone").required(),
            FieldSpec::email(EMAIL, "Email").required(),
        ]),
    )
}
