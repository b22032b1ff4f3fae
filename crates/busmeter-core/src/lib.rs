//! busmeter core - meter photo compression
//!
//! Vehicle managers back every odometer and fuel reading with a photo of the
//! meter. This crate turns whatever the phone camera produced into a JPEG
//! that is at most 1024px wide and, whenever the content allows, at most
//! 200 KiB, before it is handed to storage.
//!
//! The pipeline is decode, downscale, then a quality search from 0.9 down to
//! 0.2 that stops at the first encoding inside the byte budget.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod report;
pub mod slots;
pub mod source;
pub mod validate;

pub use compress::{
    compress, CompressError, CompressedResult, CompressionEngine, TargetSpec,
    INVALID_SETTINGS_MESSAGE, PROCESSING_FAILED_MESSAGE,
};
pub use decode::{DecodeError, Dimensions};
pub use encode::{EncodeError, QualityLevel, QualityOutOfRange};
pub use report::{format_byte_size, SizeReport};
pub use slots::{PhotoSlot, SlotTracker, Ticket};
pub use source::{MediaType, SourceImage};
pub use validate::{validate_upload, ValidationError, MAX_UPLOAD_BYTES};
