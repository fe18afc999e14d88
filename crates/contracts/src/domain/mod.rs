//! Ресурсы сайта, редактируемые в админке

pub mod a001_product;
pub mod a002_event;
pub mod a003_certificate;
pub mod a004_gallery_item;
pub mod a005_quality_section;
pub mod a006_rnd;
pub mod a007_about;
pub mod a008_contact_info;
pub mod a009_showcase;
