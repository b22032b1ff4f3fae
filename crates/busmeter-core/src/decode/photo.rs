//! Photo decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};
use crate::source::SourceImage;

/// Decode a source photo into an upright RGB raster.
///
/// The container format is sniffed from the bytes; the declared media type
/// is only used when sniffing finds nothing. EXIF orientation is applied the
/// same way a browser does when it draws a photo onto a canvas, and any
/// alpha channel is flattened onto black.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be decoded and
/// `DecodeError::EmptyImage` if the decoder reports a zero-sized image.
pub fn decode_image(source: &SourceImage<'_>) -> Result<DecodedImage, DecodeError> {
    let bytes = source.bytes();
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = get_orientation(bytes);

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        reader.set_format(source.media_type().image_format());
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }

    let upright = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(flatten_to_rgb(upright)))
}

/// Read the EXIF orientation tag, defaulting to `Normal` when the file has
/// no EXIF block or the tag is missing.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Drop the alpha channel, premultiplying against a black background.
fn flatten_to_rgb(img: DynamicImage) -> image::RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let mut rgb = image::RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        let a = a as u16;
        dst.0 = [
            ((r as u16 * a + 127) / 255) as u8,
            ((g as u16 * a + 127) / 255) as u8,
            ((b as u16 * a + 127) / 255) as u8,
        ];
    }
    rgb
}
