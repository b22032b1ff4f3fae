//! Width-bounded downscaling.
//!
//! Photos are scaled so their width does not exceed the target width. The
//! height follows from the source aspect ratio. Images that are already
//! narrow enough are never upscaled.

use super::{DecodeError, DecodedImage, Dimensions};

/// Compute the output dimensions for a source raster and a target width.
///
/// If the source is wider than `target_width`, the width becomes
/// `target_width` and the height is scaled by the same ratio and rounded
/// (never below 1). Otherwise the source dimensions are returned unchanged.
pub fn fit_to_width(source: Dimensions, target_width: u32) -> Dimensions {
    if source.width <= target_width || target_width == 0 {
        return source;
    }

    let height = (target_width as f64 * source.aspect_ratio()).round() as u32;
    Dimensions::new(target_width, height.max(1))
}

/// Resample an image to exact dimensions with a single bilinear pass.
///
/// # Errors
///
/// Returns `DecodeError::InvalidTarget` for a zero-sized target and
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn resize(image: &DecodedImage, target: Dimensions) -> Result<DecodedImage, DecodeError> {
    if target.is_empty() {
        return Err(DecodeError::InvalidTarget {
            width: target.width,
            height: target.height,
        });
    }

    if image.dimensions() == target {
        return Ok(image.clone());
    }

    let view = image
        .as_rgb_view()
        .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(
        &view,
        target.width,
        target.height,
        image::imageops::FilterType::Triangle,
    );

    Ok(DecodedImage::from_rgb_image(resized))
}
