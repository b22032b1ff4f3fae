//! Size-budgeted compression.
//!
//! The engine decodes a photo, scales it down to the target width and then
//! walks the quality ladder (0.9 down to 0.2) until an encoding fits the byte
//! budget. When nothing fits, the 0.2 encoding is returned as a best effort.

use tracing::{debug, warn};

use super::surface::RenderSurface;
use super::{CompressError, TargetSpec};
use crate::decode::{self, Dimensions};
use crate::encode::{EncodeError, JpegEncoder, LossyEncoder, QualityLevel};
use crate::report::SizeReport;
use crate::source::{MediaType, SourceImage};

/// An encoded photo ready for preview and upload.
#[derive(Debug, Clone)]
pub struct CompressedResult {
    bytes: Vec<u8>,
    media_type: MediaType,
    dimensions: Dimensions,
    source_dimensions: Dimensions,
    quality: QualityLevel,
    attempts: u8,
    within_budget: bool,
}

impl CompressedResult {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Dimensions of the encoded image.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Dimensions of the decoded source, after EXIF orientation.
    pub fn source_dimensions(&self) -> Dimensions {
        self.source_dimensions
    }

    /// Quality level of the returned encoding.
    pub fn quality(&self) -> QualityLevel {
        self.quality
    }

    /// Number of encodings made before this one was chosen (inclusive).
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Whether the encoding fits the budget it was compressed against.
    pub fn within_budget(&self) -> bool {
        self.within_budget
    }

    /// Preview text for this result against `max_size_bytes`.
    pub fn size_report(&self, max_size_bytes: u64) -> SizeReport {
        SizeReport::new(self.byte_len() as u64, max_size_bytes)
    }
}

/// Compresses photos to a byte budget.
///
/// The engine holds only its encoder, which is stateless, so one engine can
/// be shared across threads and concurrent calls never interfere.
#[derive(Debug, Clone, Default)]
pub struct CompressionEngine<E = JpegEncoder> {
    encoder: E,
}

impl CompressionEngine<JpegEncoder> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: LossyEncoder> CompressionEngine<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Compress `source` to fit `spec`.
    ///
    /// # Errors
    ///
    /// - `CompressError::InvalidTarget` if the budget or width is zero
    /// - `CompressError::Decode` if the bytes are not a readable image
    /// - `CompressError::Encode` if the encoder fails or returns nothing
    ///
    /// Missing the budget is not an error; check
    /// [`CompressedResult::within_budget`].
    pub fn compress(
        &self,
        source: &SourceImage<'_>,
        spec: &TargetSpec,
    ) -> Result<CompressedResult, CompressError> {
        spec.validate()?;

        let decoded = decode::decode_image(source)?;
        let source_dimensions = decoded.dimensions();
        let size = decode::fit_to_width(source_dimensions, spec.target_width);
        debug!(
            media_type = %source.media_type(),
            source_bytes = source.byte_len(),
            source = %source_dimensions,
            output = %size,
            "rendering photo"
        );

        let surface = RenderSurface::render(decoded, size)?;
        self.search(&surface, source_dimensions, spec.max_size_bytes)
    }

    /// Walk the quality ladder until an encoding fits `max_size_bytes`.
    ///
    /// Attempts run one at a time; only the most recent over-budget encoding
    /// is kept, so at most two buffers exist at once.
    fn search(
        &self,
        surface: &RenderSurface,
        source_dimensions: Dimensions,
        max_size_bytes: u64,
    ) -> Result<CompressedResult, CompressError> {
        let mut attempts = 0u8;
        let mut floor: Option<(QualityLevel, Vec<u8>)> = None;

        for quality in QualityLevel::search_ladder() {
            let bytes = surface.encode(&self.encoder, quality)?;
            attempts += 1;
            debug!(quality = %quality, bytes = bytes.len(), max_size_bytes, "encode attempt");

            if bytes.len() as u64 <= max_size_bytes {
                debug!(quality = %quality, attempts, "photo fits budget");
                return Ok(self.finish(bytes, surface, source_dimensions, quality, attempts, true));
            }
            floor = Some((quality, bytes));
        }

        let (quality, bytes) = floor.ok_or_else(|| {
            EncodeError::EncodingFailed("no quality levels were attempted".to_string())
        })?;
        warn!(
            quality = %quality,
            bytes = bytes.len(),
            max_size_bytes,
            "photo exceeds budget at lowest quality"
        );
        Ok(self.finish(bytes, surface, source_dimensions, quality, attempts, false))
    }

    fn finish(
        &self,
        bytes: Vec<u8>,
        surface: &RenderSurface,
        source_dimensions: Dimensions,
        quality: QualityLevel,
        attempts: u8,
        within_budget: bool,
    ) -> CompressedResult {
        CompressedResult {
            bytes,
            media_type: self.encoder.media_type(),
            dimensions: surface.dimensions(),
            source_dimensions,
            quality,
            attempts,
            within_budget,
        }
    }
}

/// Compress with the default JPEG engine.
pub fn compress(
    source: &SourceImage<'_>,
    spec: &TargetSpec,
) -> Result<CompressedResult, CompressError> {
    CompressionEngine::new().compress(source, spec)
}
