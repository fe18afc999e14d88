use crate::shared::{FetchOne, FieldSchema, FieldSpec, ResourceDescriptor};

pub const PAGE_TITLE: &str = "pageTitle";
pub const INTRO: &str = "intro";
pub const NAME: &str = "name";
pub const DETAILS: &str = "details";

/// Заголовок и вступление страницы About Us
pub fn page_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::singleton(
        "about_page",
        "About page",
        "/api/about-us/page",
        FieldSchema::new(vec![
            FieldSpec::text(PAGE_TITLE, "Page Title").required(),
            FieldSpec::long_text(INTRO, "Intro Text"),
        ]),
    )
}

/// Content blocks of the About Us page
pub fn section_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "about_sections",
        "About section",
        "/api/about-us/sections",
        "sections",
        "section",
        FieldSchema::new(vec![
            FieldSpec::text(NAME, "Section Title").required().searchable(),
            FieldSpec::long_text(DETAILS, "Description").required(),
        ]),
    )
    .with_fetch_one(FetchOne::FromList)
}
