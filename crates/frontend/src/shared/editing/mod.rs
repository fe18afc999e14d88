//! Client-side resource-editing lifecycle shared by every admin page

pub mod collection;
pub mod controller;
pub mod draft;
pub mod error;
pub mod lock;
pub mod navigation;
pub mod notice;
pub mod upload;
pub mod view_model;

pub use collection::{CollectionError, CollectionStore, UpsertOutcome};
pub use controller::{
    load_all, EditTarget, EditorConfig, EditorSnapshot, Loaded, Phase, ResourceEditingController,
    SaveOutcome, SkipReason, UnchangedSavePolicy,
};
pub use draft::{DraftError, FormDraftState};
pub use error::EditError;
pub use lock::{LockGuard, LockTarget, OperationLocks};
pub use navigation::{NoNavigation, Navigator, RouterNavigator};
pub use notice::{Notice, NoticeExpiry, NoticeKind};
pub use upload::{PendingUpload, PickedFile, PreviewHandle, UploadError, UploadPolicy, UploadStagingArea};
pub use view_model::EditorViewModel;
