//! Photo compression WASM bindings.
//!
//! This module exposes the busmeter-core pipeline to the manager dashboard:
//! each photo input validates the selected file, compresses it, previews the
//! result with its size line and then uploads the bytes.
//!
//! # Functions
//!
//! - [`validate_image`] - Check media type and the 10 MB ceiling
//! - [`compress_image`] - Downscale and re-encode to the byte budget
//! - [`format_byte_size`] - Format a byte count for display
//!
//! # Example
//!
//! ```typescript
//! import { validate_image, compress_image } from '@busmeter/wasm';
//!
//! validate_image(file.type, file.size);
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const photo = compress_image(bytes, file.type, { maxSizeBytes: 200 * 1024 });
//! preview.src = URL.createObjectURL(new Blob([photo.bytes], { type: photo.media_type }));
//! sizeLine.textContent = photo.size_report;
//! ```

use busmeter_core::{
    CompressError, CompressionEngine, MediaType, SourceImage, TargetSpec,
    INVALID_SETTINGS_MESSAGE,
};
use wasm_bindgen::prelude::*;

use crate::types::JsCompressedImage;

/// Validate a selected file before reading it.
///
/// # Errors
///
/// Throws the message to show next to the input when the type is not JPEG,
/// PNG or WebP, the file is larger than 10 MB, or the size is not a
/// non-negative finite number.
#[wasm_bindgen]
pub fn validate_image(media_type: &str, byte_len: f64) -> Result<(), JsValue> {
    let byte_len = upload_byte_len(byte_len)
        .ok_or_else(|| JsValue::from_str(&format!("Invalid file size: {}", byte_len)))?;
    busmeter_core::validate_upload(media_type, byte_len)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress a photo to the byte budget.
///
/// # Arguments
///
/// * `bytes` - The selected file's bytes as a `Uint8Array`
/// * `media_type` - The file's declared MIME type (`file.type`)
/// * `options` - Optional `{ maxSizeBytes, targetWidth }`; missing keys use
///   200 KiB and 1024px
///
/// # Errors
///
/// Throws a short message fit for display ("Failed to process image" or
/// "Invalid compression settings"); the full cause is logged to the browser
/// console. A photo that stays over budget at the lowest quality is not an
/// error; check `within_budget`.
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    media_type: &str,
    options: JsValue,
) -> Result<JsCompressedImage, JsValue> {
    let spec = parse_options(options).map_err(|e| {
        report_failure(
            &format!("Invalid compression options: {}", e),
            INVALID_SETTINGS_MESSAGE,
        )
    })?;
    compress_with_spec(bytes, media_type, &spec)
        .map_err(|e| report_failure(&e.to_string(), e.user_message()))
}

/// Format a byte count as "512 B", "183.42 KB" or "1.20 MB".
#[wasm_bindgen]
pub fn format_byte_size(bytes: f64) -> String {
    busmeter_core::format_byte_size(bytes.max(0.0) as u64)
}

/// Log `detail` to the console and build the error thrown to the caller.
fn report_failure(detail: &str, user_message: &str) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "Error compressing image: {}",
        detail
    )));
    JsValue::from_str(user_message)
}

fn parse_options(options: JsValue) -> Result<TargetSpec, serde_wasm_bindgen::Error> {
    if options.is_undefined() || options.is_null() {
        return Ok(TargetSpec::default());
    }
    serde_wasm_bindgen::from_value(options)
}

/// A JS file size as a byte count; `None` for NaN, infinities and negatives.
pub(crate) fn upload_byte_len(byte_len: f64) -> Option<u64> {
    (byte_len.is_finite() && byte_len >= 0.0).then_some(byte_len as u64)
}

/// Target-independent part of [`compress_image`], usable off wasm32.
pub(crate) fn compress_with_spec(
    bytes: &[u8],
    media_type: &str,
    spec: &TargetSpec,
) -> Result<JsCompressedImage, CompressError> {
    let media_type = MediaType::from_mime(media_type)
        .ok_or_else(|| CompressError::UnsupportedMediaType(media_type.to_string()))?;

    CompressionEngine::new()
        .compress(&SourceImage::new(bytes, media_type), spec)
        .map(|result| JsCompressedImage::new(result, spec.max_size_bytes))
}
