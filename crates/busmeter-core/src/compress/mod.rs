//! Budgeted photo compression.
//!
//! Ties decoding, resizing and encoding together into the single operation
//! the photo inputs call: take whatever the camera produced and return a
//! JPEG no wider than the target width that fits the byte budget when
//! possible.
//!
//! # Examples
//!
//! ```ignore
//! use busmeter_core::{compress, MediaType, SourceImage, TargetSpec};
//!
//! let bytes = std::fs::read("odometer.jpg").unwrap();
//! let result = compress(&SourceImage::new(&bytes, MediaType::Jpeg), &TargetSpec::default())?;
//! if !result.within_budget() {
//!     eprintln!("{}", result.size_report(TargetSpec::default().max_size_bytes));
//! }
//! ```

mod engine;
mod surface;
mod target;

pub use engine::{compress, CompressedResult, CompressionEngine};
pub use surface::RenderSurface;
pub use target::{TargetSpec, DEFAULT_MAX_SIZE_BYTES, DEFAULT_TARGET_WIDTH};

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Message shown to end users for any processing failure.
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process image";

/// Message shown to end users when the compression settings are unusable.
pub const INVALID_SETTINGS_MESSAGE: &str = "Invalid compression settings";

/// Errors from a compression call.
///
/// Exceeding the byte budget is not represented here; it is reported on the
/// returned [`CompressedResult`].
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Invalid target: max size {max_size_bytes} bytes, width {target_width}px")]
    InvalidTarget {
        max_size_bytes: u64,
        target_width: u32,
    },
}

impl CompressError {
    /// Text for the photo input's error line. Every processing failure
    /// shares one message; the details stay in the `Display` output.
    pub fn user_message(&self) -> &'static str {
        match self {
            CompressError::UnsupportedMediaType(_)
            | CompressError::Decode(_)
            | CompressError::Encode(_) => PROCESSING_FAILED_MESSAGE,
            CompressError::InvalidTarget { .. } => INVALID_SETTINGS_MESSAGE,
        }
    }
}
