use crate::shared::{FieldSchema, FieldSpec, ImageSlot, MediaAccept, ResourceDescriptor};

pub const CERTIFICATE_BODY: &str = "certificateBody";
pub const CERTIFICATE_NUMBER: &str = "certificateNumber";
pub const EXPIRY_DATE: &str = "expiryDate";

/// Сертификаты качества (`/api/certificates`)
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "certificates",
        "Certificate",
        "/api/certificates",
        "certificates",
        "certificate",
        FieldSchema::new(vec![
            FieldSpec::text(CERTIFICATE_BODY, "Certificate Body")
                .required()
                .searchable()
                .placeholder("ISO, HACCP, Organic.."),
            FieldSpec::text(CERTIFICATE_NUMBER, "Certificate Number")
                .required()
                .searchable(),
            FieldSpec::date(EXPIRY_DATE, "Expiry Date").required().placeholder("YYYY-MM-DD"),
        ]),
    )
    .with_image(ImageSlot {
        form_field: "image",
        response_key: "image",
        accept: MediaAccept::Images,
        required: false,
    })
}
