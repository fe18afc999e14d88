use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::shared::{ImageRef, ImageSlot, MediaAccept};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::shared::http::FilePart;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select {expected} file")]
    InvalidMediaType {
        media_type: String,
        expected: &'static str,
    },

    #[error("File is too large ({}). Maximum size is {}.", size_label(.size), size_label(.limit))]
    TooLarge { size: u64, limit: u64 },
}

/// What a slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub accept: MediaAccept,
    pub max_bytes: u64,
}

impl UploadPolicy {
    pub fn for_slot(slot: &ImageSlot, max_bytes: u64) -> Self {
        Self {
            accept: slot.accept,
            max_bytes,
        }
    }

    pub fn admit(&self, file: &PickedFile) -> Result<(), UploadError> {
        if !self.accept.admits(&file.media_type) {
            return Err(UploadError::InvalidMediaType {
                media_type: file.media_type.clone(),
                expected: self.accept.describe(),
            });
        }
        if file.size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: file.size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// A file as the picker or a drop event hands it over
#[derive(Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Rc<[u8]>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: bytes.len() as u64,
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size", &self.size)
            .finish()
    }
}

/// Local `data:` URL shown until the server returns the stored reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn for_file(file: &PickedFile) -> Self {
        Self(format!(
            "data:{};base64,{}",
            file.media_type,
            STANDARD.encode(&file.bytes[..])
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file: PickedFile,
    pub preview: PreviewHandle,
}

impl PendingUpload {
    pub fn to_part(&self, field: &str) -> FilePart {
        FilePart {
            field: field.to_string(),
            file_name: self.file.name.clone(),
            media_type: self.file.media_type.clone(),
            bytes: Rc::clone(&self.file.bytes),
        }
    }
}

/// Staged file selection for one image slot. Never talks to the network.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadStagingArea {
    policy: UploadPolicy,
    pending: Option<PendingUpload>,
    persisted: Option<ImageRef>,
}

impl UploadStagingArea {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            pending: None,
            persisted: None,
        }
    }

    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    /// Replaces any previous staging; a rejected file leaves it as it was
    pub fn stage(&mut self, file: PickedFile) -> Result<&PendingUpload, UploadError> {
        self.policy.admit(&file)?;
        log::debug!("staged {} ({} bytes)", file.name, file.size);
        let preview = PreviewHandle::for_file(&file);
        Ok(self.pending.insert(PendingUpload { file, preview }))
    }

    /// Drop zones and pickers may yield several files; only the first counts
    pub fn stage_first(
        &mut self,
        files: impl IntoIterator<Item = PickedFile>,
    ) -> Option<Result<&PendingUpload, UploadError>> {
        let first = files.into_iter().next()?;
        Some(self.stage(first))
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Image reference of the last synced entity
    pub fn set_persisted(&mut self, image: Option<ImageRef>) {
        self.persisted = image;
    }

    pub fn persisted(&self) -> Option<&ImageRef> {
        self.persisted.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingUpload> {
        self.pending.as_ref()
    }

    pub fn is_staged(&self) -> bool {
        self.pending.is_some()
    }

    /// Staged preview, else the persisted image
    pub fn preview(&self) -> Option<ImageRef> {
        match &self.pending {
            Some(pending) => Some(ImageRef::Pending {
                preview: pending.preview.as_str().to_string(),
            }),
            None => self.persisted.clone(),
        }
    }
}

fn size_label(bytes: &u64) -> String {
    human_size(*bytes)
}

pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.0} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 5 * 1024 * 1024;

    fn images() -> UploadStagingArea {
        UploadStagingArea::new(UploadPolicy {
            accept: MediaAccept::Images,
            max_bytes: LIMIT,
        })
    }

    #[test]
    fn test_stage_builds_data_url_preview() {
        let mut area = images();
        let pending = area
            .stage(PickedFile::new("leaf.png", "image/png", vec![1, 2, 3]))
            .unwrap();
        assert_eq!(pending.preview.as_str(), "data:image/png;base64,AQID");
        assert!(area.is_staged());
        assert!(area.preview().unwrap().is_pending());
    }

    #[test]
    fn test_rejected_file_keeps_previous_staging() {
        let mut area = images();
        area.stage(PickedFile::new("a.jpg", "image/jpeg", vec![0; 16]))
            .unwrap();

        let err = area
            .stage(PickedFile::new("doc.pdf", "application/pdf", vec![0; 16]))
            .unwrap_err();
        assert!(matches!(err, UploadError::InvalidMediaType { .. }));
        assert_eq!(err.to_string(), "Please select an image file");
        assert_eq!(area.pending().unwrap().file.name, "a.jpg");
    }

    #[test]
    fn test_too_large() {
        let mut area = images();
        let big = PickedFile {
            name: "huge.jpg".into(),
            media_type: "image/jpeg".into(),
            size: LIMIT + 1,
            bytes: Rc::from(Vec::new()),
        };
        assert_eq!(
            area.stage(big).unwrap_err(),
            UploadError::TooLarge {
                size: LIMIT + 1,
                limit: LIMIT
            }
        );
        assert!(!area.is_staged());
    }

    #[test]
    fn test_clear_reverts_to_persisted() {
        let mut area = images();
        area.set_persisted(Some(ImageRef::Url("/uploads/a.png".into())));
        area.stage(PickedFile::new("b.png", "image/png", vec![9]))
            .unwrap();
        area.clear();
        assert_eq!(area.preview(), Some(ImageRef::Url("/uploads/a.png".into())));
    }

    #[test]
    fn test_stage_first_takes_only_first() {
        let mut area = images();
        let files = vec![
            PickedFile::new("one.png", "image/png", vec![1]),
            PickedFile::new("two.png", "image/png", vec![2]),
        ];
        assert!(area.stage_first(files).unwrap().is_ok());
        assert_eq!(area.pending().unwrap().file.name, "one.png");
        assert!(area.stage_first(Vec::new()).is_none());
    }

    #[test]
    fn test_video_slot() {
        let mut area = UploadStagingArea::new(UploadPolicy {
            accept: MediaAccept::ImagesAndVideos,
            max_bytes: LIMIT,
        });
        assert!(area
            .stage(PickedFile::new("clip.mp4", "video/mp4", vec![0; 4]))
            .is_ok());
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }
}
