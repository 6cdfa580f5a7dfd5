//! Skin overlay merging
//!
//! This module contains the pixel-level work on a single skin:
//! - The fixed head overlay region table
//! - Region relocation with source clearing
//! - Head-only isolation
//! - The per-file load/merge/save pipeline

use image::Rgba;

/// Head-only filtering of merged skins
pub mod isolate;
/// Pixel block relocation between source and destination offsets
pub mod merge;
/// Single file load, validate, merge and save pipeline
pub mod processor;
/// Region records and the head overlay table
pub mod region;

pub use processor::{SkinOutcome, process_skin};
pub use region::{HEAD_OVERLAY, Region};

/// Fully transparent black, written wherever a pixel is cleared
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
