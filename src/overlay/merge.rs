//! In-place relocation of overlay regions
//!
//! Each pixel of a region is read from its source coordinate, written to its
//! destination only when visible, and the source is always cleared afterwards.
//! Copying is conditional while clearing is not, so a fully transparent source
//! block still leaves the destination alone but ends up blank itself.

use crate::overlay::TRANSPARENT;
use crate::overlay::region::Region;
use image::{Rgba, RgbaImage};

/// Move every region's source block onto its destination, in slice order
///
/// Pixels whose source lies outside the image are skipped entirely. Pixels
/// whose destination lies outside the image are not copied, but their source
/// is still cleared.
pub fn merge_overlay(image: &mut RgbaImage, regions: &[Region]) {
    for region in regions {
        for y in 0..region.height {
            for x in 0..region.width {
                relocate_pixel(image, region.source_at(x, y), region.destination_at(x, y));
            }
        }
    }
}

fn relocate_pixel(
    image: &mut RgbaImage,
    source: Option<(u32, u32)>,
    destination: Option<(u32, u32)>,
) {
    let Some((src_x, src_y)) = source else {
        return;
    };
    let Some(&pixel) = image.get_pixel_checked(src_x, src_y) else {
        return;
    };

    let target = match destination {
        Some((dest_x, dest_y)) if is_visible(pixel) => image.get_pixel_mut_checked(dest_x, dest_y),
        _ => None,
    };
    if let Some(target) = target {
        *target = pixel;
    }

    if let Some(cleared) = image.get_pixel_mut_checked(src_x, src_y) {
        *cleared = TRANSPARENT;
    }
}

const fn is_visible(pixel: Rgba<u8>) -> bool {
    let Rgba([_, _, _, alpha]) = pixel;
    alpha > 0
}
