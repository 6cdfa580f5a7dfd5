//! Per-file skin pipeline: load, validate, merge, isolate, save

use crate::io::configuration::SKIN_SIZE;
use crate::io::error::Result;
use crate::io::image::{load_rgba, save_png};
use crate::overlay::isolate::keep_only_head;
use crate::overlay::merge::merge_overlay;
use crate::overlay::region::HEAD_OVERLAY;
use image::RgbaImage;
use std::path::Path;

/// What happened to a single input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinOutcome {
    /// The merged skin was written to the destination
    Written,
    /// The image was not a skin-sized square, nothing was written
    SkippedDimensions {
        /// Width of the rejected image
        width: u32,
        /// Height of the rejected image
        height: u32,
    },
}

impl SkinOutcome {
    /// Whether an output file was produced
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Merge the head overlay of the skin at `source` and save it to `destination`
///
/// Images that are not exactly `SKIN_SIZE` x `SKIN_SIZE` are skipped without
/// error and without touching `destination`. An existing file at
/// `destination` is overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The source file cannot be read or decoded
/// - The result cannot be encoded or written to `destination`
pub fn process_skin(source: &Path, destination: &Path, head_only: bool) -> Result<SkinOutcome> {
    let mut skin = load_rgba(source)?;

    let (width, height) = skin.dimensions();
    if (width, height) != (SKIN_SIZE, SKIN_SIZE) {
        log::info!(
            "Skipping {}: {width}x{height} is not a {SKIN_SIZE}x{SKIN_SIZE} skin",
            source.display()
        );
        return Ok(SkinOutcome::SkippedDimensions { width, height });
    }

    apply_overlay(&mut skin, head_only);
    save_png(&skin, destination)?;

    log::debug!("Merged {} -> {}", source.display(), destination.display());
    Ok(SkinOutcome::Written)
}

/// Apply the head overlay merge, and optionally the head isolation, in memory
pub fn apply_overlay(skin: &mut RgbaImage, head_only: bool) {
    merge_overlay(skin, &HEAD_OVERLAY);

    if head_only {
        keep_only_head(skin);
    }
}
