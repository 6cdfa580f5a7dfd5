//! Head-only post-processing

use crate::io::configuration::{HEAD_HEIGHT, HEAD_WIDTH, SKIN_SIZE};
use crate::overlay::TRANSPARENT;
use image::RgbaImage;

/// Clear every pixel outside the top-left head rectangle
///
/// The image is expected to be `SKIN_SIZE` x `SKIN_SIZE`. Other sizes are
/// outside the contract: only coordinates within both the skin extent and the
/// image are touched.
pub fn keep_only_head(image: &mut RgbaImage) {
    for y in 0..SKIN_SIZE {
        for x in 0..SKIN_SIZE {
            if is_head(x, y) {
                continue;
            }
            if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                *pixel = TRANSPARENT;
            }
        }
    }
}

/// Whether `(x, y)` lies inside the head rectangle kept by [`keep_only_head`]
pub const fn is_head(x: u32, y: u32) -> bool {
    x < HEAD_WIDTH && y < HEAD_HEIGHT
}
