pub mod entity;
pub mod envelope;
pub mod resource;
pub mod schema;

// Re-exports
pub use entity::{Entity, EntityId, FieldValue, ImageRef};
pub use envelope::{unwrap_envelope, EnvelopeError, Payload};
pub use resource::{FetchOne, ImageSlot, MediaAccept, ResourceDescriptor, ResourceShape, UpdateRoute};
pub use schema::{FieldError, FieldKind, FieldSchema, FieldSpec, DATE_FORMAT};
