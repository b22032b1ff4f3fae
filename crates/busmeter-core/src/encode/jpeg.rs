//! JPEG encoding for compressed meter photos.
//!
//! Uses the `image` crate's baseline JPEG encoder. Output is what the
//! upload collaborator stores, so the media type is always `image/jpeg`.

use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;

use super::{EncodeError, LossyEncoder, QualityLevel};
use crate::decode::DecodedImage;
use crate::source::MediaType;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100); out-of-range values are clamped
///
/// # Errors
///
/// Returns an error for zero dimensions, a pixel buffer whose length is not
/// `width * height * 3`, or an encoder failure.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    ImageJpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// The default lossy encoder: baseline JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoder;

impl LossyEncoder for JpegEncoder {
    fn media_type(&self) -> MediaType {
        MediaType::Jpeg
    }

    fn encode(&self, image: &DecodedImage, quality: QualityLevel) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(
            &image.pixels,
            image.width,
            image.height,
            quality.jpeg_quality(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic texture with enough detail that JPEG sizes move with
    /// quality, roughly like a photo of a dashboard.
    fn textured_pixels(width: u32, height: u32) -> Vec<u8> {
        let mut state: u32 = 0x2545_F491;
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let noise = state & 0x3F;
                pixels.push(((x * 255 / width) + noise).min(255) as u8);
                pixels.push(((y * 255 / height) + noise / 2).min(255) as u8);
                pixels.push((((x + y) * 127 / (width + height)) + noise).min(255) as u8);
            }
        }
        pixels
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&vec![128u8; 100 * 100 * 3], 100, 100, 90).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamped() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_rejects_bad_buffer() {
        let pixels = vec![128u8; 99 * 100 * 3];
        assert!(matches!(
            encode_jpeg(&pixels, 100, 100, 90),
            Err(EncodeError::InvalidPixelData {
                expected: 30000,
                actual: 29700
            })
        ));
    }

    #[test]
    fn test_encode_jpeg_rejects_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 100, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 100, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_jpeg_encoder_round_trips_dimensions() {
        let image = DecodedImage::new(64, 40, textured_pixels(64, 40));
        let bytes = JpegEncoder
            .encode(&image, QualityLevel::SEARCH_START)
            .unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 40));
        assert_eq!(JpegEncoder.media_type(), MediaType::Jpeg);
    }

    #[test]
    fn test_size_shrinks_down_the_ladder() {
        let image = DecodedImage::new(128, 96, textured_pixels(128, 96));

        let sizes: Vec<usize> = QualityLevel::search_ladder()
            .map(|q| JpegEncoder.encode(&image, q).unwrap().len())
            .collect();

        // Adjacent levels may wobble by a few bytes; the trend must not.
        for pair in sizes.windows(2) {
            assert!(
                pair[1] <= pair[0] + pair[0] / 50,
                "Size grew as quality dropped: {:?}",
                sizes
            );
        }
        assert!(sizes[0] > sizes[sizes.len() - 1] * 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Valid input always yields a JPEG with SOI and EOI markers.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            width in 1u32..=40,
            height in 1u32..=40,
            tenths in 1u8..=10,
        ) {
            let image = DecodedImage::new(width, height, vec![100u8; (width * height * 3) as usize]);
            let quality = QualityLevel::from_tenths(tenths).unwrap();

            let jpeg = JpegEncoder.encode(&image, quality).unwrap();

            prop_assert!(jpeg.len() >= 4);
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Same raster and quality encode to the same bytes.
        #[test]
        fn prop_deterministic_output(
            width in 1u32..=20,
            height in 1u32..=20,
            tenths in 2u8..=9,
        ) {
            let image = DecodedImage::new(width, height, vec![77u8; (width * height * 3) as usize]);
            let quality = QualityLevel::from_tenths(tenths).unwrap();

            prop_assert_eq!(
                JpegEncoder.encode(&image, quality).unwrap(),
                JpegEncoder.encode(&image, quality).unwrap()
            );
        }
    }
}
