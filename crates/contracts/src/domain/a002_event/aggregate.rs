use crate::shared::{FieldSchema, FieldSpec, ImageSlot, MediaAccept, ResourceDescriptor};

pub const TITLE: &str = "title";
pub const DATE: &str = "date";
pub const LOCATION: &str = "location";
pub const DESCRIPTION: &str = "description";
pub const HIGHLIGHTS: &str = "highlights";
pub const CLOSING_LINE: &str = "closingLine";

/// Мероприятия и выставки (`/api/events`)
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "events",
        "Event",
        "/api/events",
        "events",
        "event",
        FieldSchema::new(vec![
            FieldSpec::text(TITLE, "Event Title")
                .required()
                .searchable()
                .placeholder("Type Event Title.."),
            FieldSpec::date(DATE, "Event Date").required().placeholder("YYYY-MM-DD"),
            FieldSpec::text(LOCATION, "Event Location")
                .required()
                .searchable()
                .placeholder("Type Event Location.."),
            FieldSpec::long_text(DESCRIPTION, "Event Description").required(),
            FieldSpec::long_text(HIGHLIGHTS, "Event Highlights"),
            FieldSpec::long_text(CLOSING_LINE, "Closing Line / CTA"),
        ]),
    )
    .with_image(ImageSlot {
        form_field: "image",
        response_key: "image",
        accept: MediaAccept::Images,
        required: false,
    })
}
