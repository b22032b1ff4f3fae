//! Checks run on a selected file before it is compressed.
//!
//! The compression engine trusts its caller; these checks are what the photo
//! inputs run first so oversized or non-image files never reach the decoder.

use thiserror::Error;

use crate::source::MediaType;

/// Largest file accepted before compression (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a valid image (JPEG, PNG, or WebP)")]
    UnsupportedType { media_type: String },

    #[error("Image size must be less than 10MB")]
    TooLarge { byte_len: u64 },
}

/// Validate a selected file's declared media type and size.
///
/// Returns the parsed media type on success.
pub fn validate_upload(media_type: &str, byte_len: u64) -> Result<MediaType, ValidationError> {
    let parsed =
        MediaType::from_mime(media_type).ok_or_else(|| ValidationError::UnsupportedType {
            media_type: media_type.to_string(),
        })?;

    if byte_len > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge { byte_len });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_types() {
        assert_eq!(validate_upload("image/jpeg", 1024), Ok(MediaType::Jpeg));
        assert_eq!(validate_upload("image/jpg", 1024), Ok(MediaType::Jpeg));
        assert_eq!(validate_upload("image/png", 0), Ok(MediaType::Png));
        assert_eq!(validate_upload("image/webp", 5_000_000), Ok(MediaType::WebP));
    }

    #[test]
    fn test_rejects_other_types() {
        let err = validate_upload("image/heic", 1024).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedType {
                media_type: "image/heic".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Please upload a valid image (JPEG, PNG, or WebP)"
        );
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        assert!(validate_upload("image/jpeg", MAX_UPLOAD_BYTES).is_ok());

        let err = validate_upload("image/jpeg", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { byte_len: 10_485_761 });
        assert_eq!(err.to_string(), "Image size must be less than 10MB");
    }

    #[test]
    fn test_type_checked_before_size() {
        assert!(matches!(
            validate_upload("text/plain", MAX_UPLOAD_BYTES * 2),
            Err(ValidationError::UnsupportedType { .. })
        ));
    }
}
