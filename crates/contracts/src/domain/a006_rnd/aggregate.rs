use crate::shared::{FetchOne, FieldSchema, FieldSpec, ResourceDescriptor, UpdateRoute};

pub const PAGE_TITLE: &str = "pageTitle";
pub const INTRO: &str = "intro";
pub const NAME: &str = "name";
pub const DETAILS: &str = "details";

/// Вводная часть страницы R&D
pub fn page_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::singleton(
        "rnd_page",
        "R&D page",
        "/api/rnd/page",
        FieldSchema::new(vec![
            FieldSpec::text(PAGE_TITLE, "Page Title").required(),
            FieldSpec::long_text(INTRO, "Intro"),
        ]),
    )
}

/// Секции R&D: список по `/api/rnd/sections`, обновление одним `PUT /api/rnd/section`
pub fn section_descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "rnd_sections",
        "R&D section",
        "/api/rnd/sections",
        "sections",
        "section",
        FieldSchema::new(vec![
            FieldSpec::text(NAME, "Section Name").required().searchable(),
            FieldSpec::long_text(DETAILS, "Details").required(),
        ]),
    )
    .with_fetch_one(FetchOne::FromList)
    .with_update(UpdateRoute::Shared {
        path: "/api/rnd/section",
        id_key: "sectionId",
    })
}
