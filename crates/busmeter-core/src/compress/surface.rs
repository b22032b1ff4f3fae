//! Off-screen render surface for a single compression.
//!
//! A surface owns the resized raster that every encode attempt reads from.
//! It lives exactly as long as the `compress` call that created it and is
//! released on every exit path when it goes out of scope.

use crate::decode::{self, DecodeError, DecodedImage, Dimensions};
use crate::encode::{EncodeError, LossyEncoder, QualityLevel};

#[derive(Debug)]
pub struct RenderSurface {
    raster: DecodedImage,
}

impl RenderSurface {
    /// Draw `source` onto a surface of `size`.
    ///
    /// Takes the decoded image by value so it is freed as soon as the
    /// resized copy exists. When no resize is needed the buffer is moved in.
    pub fn render(source: DecodedImage, size: Dimensions) -> Result<Self, DecodeError> {
        let raster = if source.dimensions() == size {
            source
        } else {
            decode::resize(&source, size)?
        };
        Ok(Self { raster })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.raster.dimensions()
    }

    /// Encode the surface contents once.
    ///
    /// An encoder that returns no bytes is reported as
    /// `EncodeError::EmptyOutput`.
    pub fn encode<E>(&self, encoder: &E, quality: QualityLevel) -> Result<Vec<u8>, EncodeError>
    where
        E: LossyEncoder + ?Sized,
    {
        let bytes = encoder.encode(&self.raster, quality)?;
        if bytes.is_empty() {
            return Err(EncodeError::EmptyOutput { quality });
        }
        Ok(bytes)
    }
}
