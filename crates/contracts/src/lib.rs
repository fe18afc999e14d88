//! Wire-level types shared by the Salvia admin console.
//!
//! - `shared`: generic entity, field schema, response envelope and resource descriptor
//! - `domain`: one descriptor per editable resource of the marketing site
//! - `system`: authentication DTOs

pub mod domain;
pub mod shared;
pub mod system;
