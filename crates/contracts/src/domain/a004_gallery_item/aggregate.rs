use crate::shared::{FieldSchema, FieldSpec, ImageSlot, MediaAccept, ResourceDescriptor};

pub const TITLE: &str = "title";

/// Галерея: изображения и видео (`/api/gallery`)
pub fn descriptor() -> ResourceDescriptor {
    ResourceDescriptor::collection(
        "gallery",
        "Gallery item",
        "/api/gallery",
        "gallery",
        "item",
        FieldSchema::new(vec![FieldSpec::text(TITLE, "Title").searchable()]),
    )
    .with_image(ImageSlot {
        form_field: "image",
        response_key: "url",
        accept: MediaAccept::ImagesAndVideos,
        required: true,
    })
}

/// Gallery items render as `<video>` when the stored file is a video
pub fn is_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    [".mp4", ".webm", ".ogg", ".mov"]
        .iter()
        .any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video() {
        assert!(is_video("/uploads/sky.MP4"));
        assert!(is_video("https://cdn/x.webm?v=2"));
        assert!(!is_video("/uploads/seeds.png"));
    }
}
