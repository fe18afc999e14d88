pub mod api_utils;
pub mod components;
pub mod config;
pub mod editing;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
