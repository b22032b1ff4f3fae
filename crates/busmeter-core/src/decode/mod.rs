//! Image decoding pipeline for meter photos.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG and WebP photos into RGB rasters
//! - Applying EXIF orientation so phone photos come out upright
//! - Width-bounded downscaling that never upscales
//!
//! # Architecture
//!
//! The pipeline is designed to run inside a Web Worker via the WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use busmeter_core::decode::{decode_image, fit_to_width};
//! use busmeter_core::{MediaType, SourceImage};
//!
//! let bytes = std::fs::read("odometer.jpg").unwrap();
//! let image = decode_image(&SourceImage::new(&bytes, MediaType::Jpeg)).unwrap();
//! let target = fit_to_width(image.dimensions(), 1024);
//! println!("{} -> {}", image.dimensions(), target);
//! ```

mod photo;
mod resize;
mod types;

pub use photo::{decode_image, get_orientation};
pub use resize::{fit_to_width, resize};
pub use types::{DecodeError, DecodedImage, Dimensions, Orientation};
