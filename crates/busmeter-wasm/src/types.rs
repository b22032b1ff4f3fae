//! WASM-compatible wrapper types for compressed photos.

use busmeter_core::{CompressedResult, SizeReport};
use wasm_bindgen::prelude::*;

/// A compressed photo handed back to JavaScript.
///
/// The encoded bytes live in WASM memory until `bytes` copies them out as a
/// `Uint8Array`, typically to build a `Blob` for preview and upload.
#[wasm_bindgen]
pub struct JsCompressedImage {
    result: CompressedResult,
    report: SizeReport,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Encoded JPEG bytes as a Uint8Array (copied out of WASM memory).
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.result.bytes())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.result.dimensions().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.result.dimensions().height
    }

    /// Quality the returned encoding was made at, in (0, 1].
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.result.quality().as_f32()
    }

    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u8 {
        self.result.attempts()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.result.byte_len()
    }

    /// MIME type for the Blob, always `image/jpeg`.
    #[wasm_bindgen(getter)]
    pub fn media_type(&self) -> String {
        self.result.media_type().mime().to_string()
    }

    /// File extension for the upload name.
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.result.media_type().extension().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn within_budget(&self) -> bool {
        self.result.within_budget()
    }

    /// Formatted size, e.g. "183.42 KB".
    #[wasm_bindgen(getter)]
    pub fn size_label(&self) -> String {
        self.report.size_label().to_string()
    }

    /// Full preview line, e.g. "Size: 183.42 KB (Image size OK)".
    #[wasm_bindgen(getter)]
    pub fn size_report(&self) -> String {
        self.report.to_string()
    }
}

impl JsCompressedImage {
    pub(crate) fn new(result: CompressedResult, max_size_bytes: u64) -> Self {
        let report = result.size_report(max_size_bytes);
        Self { result, report }
    }

    #[cfg(test)]
    pub(crate) fn result(&self) -> &CompressedResult {
        &self.result
    }
}
