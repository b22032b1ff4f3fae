//! Busmeter WASM - WebAssembly bindings for the photo compression pipeline
//!
//! This crate exposes busmeter-core to the vehicle manager dashboard, which
//! compresses odometer and fuel photos in the browser before upload.
//!
//! # Module Structure
//!
//! - `compress` - Upload validation, compression and size formatting
//! - `slots` - Per-input request tickets so stale results can be dropped
//! - `types` - WASM-compatible wrapper for the compressed photo
//!
//! # Usage
//!
//! ```typescript
//! import init, { validate_image, compress_image } from '@busmeter/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! validate_image(file.type, file.size);
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const photo = compress_image(bytes, file.type);
//! console.log(`${photo.width}x${photo.height} at q${photo.quality}: ${photo.size_label}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod slots;
mod types;

// Re-export public types
pub use compress::{compress_image, format_byte_size, validate_image};
pub use slots::JsPhotoSlots;
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
