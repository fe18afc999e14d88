pub mod details;
pub mod page;
