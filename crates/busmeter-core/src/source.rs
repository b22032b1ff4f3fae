//! Source images handed to the compression pipeline.

use image::ImageFormat;
use serde::{Deserialize, Serialize};

/// Media types accepted from the photo inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Jpeg,
    Png,
    WebP,
}

impl MediaType {
    /// Parse a MIME type string. `image/jpg` is accepted as an alias
    /// because some mobile browsers report it.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(MediaType::Jpeg),
            "image/png" => Some(MediaType::Png),
            "image/webp" => Some(MediaType::WebP),
            _ => None,
        }
    }

    /// Canonical MIME string.
    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::WebP => "image/webp",
        }
    }

    /// File extension used when naming uploads.
    pub fn extension(self) -> &'static str {
        match self {
            MediaType::Jpeg => "jpg",
            MediaType::Png => "png",
            MediaType::WebP => "webp",
        }
    }

    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            MediaType::Jpeg => ImageFormat::Jpeg,
            MediaType::Png => ImageFormat::Png,
            MediaType::WebP => ImageFormat::WebP,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

/// Encoded image bytes plus the media type the browser declared for them.
///
/// The engine only borrows the bytes for the duration of a single call.
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    bytes: &'a [u8],
    media_type: MediaType,
}

impl<'a> SourceImage<'a> {
    pub fn new(bytes: &'a [u8], media_type: MediaType) -> Self {
        Self { bytes, media_type }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_allow_list() {
        assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_mime("image/jpg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_mime("image/webp"), Some(MediaType::WebP));
    }

    #[test]
    fn test_from_mime_is_case_insensitive() {
        assert_eq!(MediaType::from_mime(" IMAGE/PNG "), Some(MediaType::Png));
    }

    #[test]
    fn test_from_mime_rejects_others() {
        assert_eq!(MediaType::from_mime("image/gif"), None);
        assert_eq!(MediaType::from_mime("application/pdf"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn test_mime_round_trips_canonical_names() {
        for media_type in [MediaType::Jpeg, MediaType::Png, MediaType::WebP] {
            assert_eq!(MediaType::from_mime(media_type.mime()), Some(media_type));
        }
        assert_eq!(MediaType::Jpeg.extension(), "jpg");
    }

    #[test]
    fn test_source_image_len() {
        let bytes = [1u8, 2, 3];
        let source = SourceImage::new(&bytes, MediaType::Png);
        assert_eq!(source.byte_len(), 3);
        assert_eq!(source.media_type(), MediaType::Png);
        assert_eq!(source.bytes(), &bytes);
    }
}
