//! Lossy encoding for compressed meter photos.
//!
//! This module provides:
//! - [`QualityLevel`], the fidelity steps walked by the size search
//! - [`LossyEncoder`], the seam between the search and a concrete codec
//! - [`JpegEncoder`], the encoder used in production
//!
//! # Examples
//!
//! ```ignore
//! use busmeter_core::encode::{JpegEncoder, LossyEncoder, QualityLevel};
//!
//! let jpeg = JpegEncoder.encode(&raster, QualityLevel::SEARCH_START).unwrap();
//! println!("Encoded {} bytes", jpeg.len());
//! ```

mod jpeg;
mod quality;

pub use jpeg::{encode_jpeg, JpegEncoder};
pub use quality::{QualityLevel, QualityOutOfRange};

use thiserror::Error;

use crate::decode::DecodedImage;
use crate::source::MediaType;

/// Errors that can occur during lossy encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec reported a failure
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The codec returned without producing any bytes
    #[error("Encoder produced no output at quality {quality}")]
    EmptyOutput { quality: QualityLevel },
}

/// A codec that turns an RGB raster into bytes at a given quality.
///
/// Implementations must be stateless between calls so a single encoder can
/// serve concurrent compressions.
pub trait LossyEncoder: Send + Sync {
    /// Media type of the bytes this encoder produces.
    fn media_type(&self) -> MediaType;

    /// Encode `image` at `quality`.
    fn encode(&self, image: &DecodedImage, quality: QualityLevel) -> Result<Vec<u8>, EncodeError>;
}
