use crate::shared::{FetchOne, FieldSchema, FieldSpec, ResourceDescriptor};

pub const NAME: &str = "name";
pub const DETAILS: &str = "details";

/// Секции страницы "Our Quality Commitment"
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "quality_sections",
        "Quality section",
        "/api/quality/sections",
        "sections",
        "section",
        FieldSchema::new(vec![
            FieldSpec::text(NAME, "Section Name").required().searchable(),
            FieldSpec::long_text(DETAILS, "Details").required(),
        ]),
    )
    .with_fetch_one(FetchOne::FromList)
}
