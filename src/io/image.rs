//! PNG loading and saving in RGBA8

use crate::io::error::{Result, SkinError};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Load an image from disk and convert it to RGBA8
///
/// The decoder is chosen from the file contents and extension, so any format
/// the `image` build supports is accepted and normalised to four channels.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(DynamicImage::into_rgba8)
        .map_err(|e| SkinError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save an RGBA8 image as PNG, replacing any existing file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SkinError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| SkinError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
