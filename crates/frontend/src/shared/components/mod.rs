pub mod entity_form;
pub mod notice_banner;
pub mod page_header;
pub mod resource_details;
pub mod resource_list;
pub mod singleton_page;
pub mod upload_dropzone;

pub use entity_form::EntityForm;
pub use notice_banner::{LoadGate, NoticeBanner};
pub use page_header::PageHeader;
pub use resource_details::{DraftForm, ResourceDetailsPage};
pub use resource_list::{CardFields, CollectionGrid, ResourceListPage};
pub use singleton_page::{SingletonPage, SingletonSection};
pub use upload_dropzone::{MediaPreview, UploadDropzone};
