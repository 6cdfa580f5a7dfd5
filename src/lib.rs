//! Merge the second-layer head overlay of 64x64 Minecraft skins into the base layer
//!
//! Each overlay face is moved onto its base face, skipping transparent pixels and
//! blanking the overlay area afterwards. Optionally everything but the head is
//! cleared, leaving a head-only texture.

#![forbid(unsafe_code)]

/// Input/output operations, batch orchestration and error handling
pub mod io;
/// Overlay region table, pixel merging and the per-file pipeline
pub mod overlay;

pub use io::error::{Result, SkinError};
