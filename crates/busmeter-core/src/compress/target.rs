//! Per-call compression targets.

use serde::{Deserialize, Serialize};

use super::CompressError;

/// Default byte budget for a compressed photo (200 KiB).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 200 * 1024;

/// Default maximum output width in pixels.
pub const DEFAULT_TARGET_WIDTH: u32 = 1024;

/// What a single compression should aim for.
///
/// Deserializes from a camelCase object; missing keys fall back to the
/// defaults, so `{}` and `{ "targetWidth": 800 }` are both valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetSpec {
    /// Maximum encoded size in bytes.
    pub max_size_bytes: u64,
    /// Maximum output width in pixels.
    pub target_width: u32,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            target_width: DEFAULT_TARGET_WIDTH,
        }
    }
}

impl TargetSpec {
    pub fn new(max_size_bytes: u64, target_width: u32) -> Self {
        Self {
            max_size_bytes,
            target_width,
        }
    }

    pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
        self.max_size_bytes = max_size_bytes;
        self
    }

    pub fn with_target_width(mut self, target_width: u32) -> Self {
        self.target_width = target_width;
        self
    }

    /// Both the budget and the width must be positive.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.max_size_bytes == 0 || self.target_width == 0 {
            return Err(CompressError::InvalidTarget {
                max_size_bytes: self.max_size_bytes,
                target_width: self.target_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = TargetSpec::default();
        assert_eq!(spec.max_size_bytes, 204_800);
        assert_eq!(spec.target_width, 1024);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let spec = TargetSpec::default()
            .with_max_size_bytes(50_000)
            .with_target_width(640);
        assert_eq!(spec, TargetSpec::new(50_000, 640));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            TargetSpec::new(0, 1024).validate(),
            Err(CompressError::InvalidTarget { .. })
        ));
        assert!(TargetSpec::new(1024, 0).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_object() {
        let spec: TargetSpec = serde_json::from_str(r#"{ "targetWidth": 800 }"#).unwrap();
        assert_eq!(spec.target_width, 800);
        assert_eq!(spec.max_size_bytes, DEFAULT_MAX_SIZE_BYTES);

        let spec: TargetSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec, TargetSpec::default());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&TargetSpec::default()).unwrap();
        assert_eq!(json, r#"{"maxSizeBytes":204800,"targetWidth":1024}"#);
    }
}
