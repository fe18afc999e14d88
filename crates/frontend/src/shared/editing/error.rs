use contracts::shared::FieldError;
use thiserror::Error;

use super::upload::UploadError;
use crate::shared::http::HttpFailure;

/// Every way an editing operation ends badly
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("{0}")]
    LoadFailure(HttpFailure),

    #[error("Please fix the highlighted fields")]
    ValidationFailure(Vec<FieldError>),

    #[error("{0}")]
    SaveFailure(HttpFailure),

    #[error("{0}")]
    UploadFailure(#[from] UploadError),

    #[error("This item no longer exists. Reload the list to continue.")]
    StaleEntity,

    #[error("No changes to save")]
    NoChanges,
}

impl EditError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            EditError::ValidationFailure(errors) => errors,
            _ => &[],
        }
    }
}
