//! Rectangular pixel blocks relocated within a single skin image

/// Rectangular block copied from a source offset to a destination offset
///
/// Both offsets address the same image. Coordinates are unsigned; an offset
/// that overflows `u32` is treated as lying outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Destination column of the top-left pixel
    pub dest_x: u32,
    /// Destination row of the top-left pixel
    pub dest_y: u32,
    /// Source column of the top-left pixel
    pub src_x: u32,
    /// Source row of the top-left pixel
    pub src_y: u32,
    /// Block width in pixels
    pub width: u32,
    /// Block height in pixels
    pub height: u32,
}

impl Region {
    /// Create a region from destination, source and extent
    pub const fn new(
        dest_x: u32,
        dest_y: u32,
        src_x: u32,
        src_y: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            dest_x,
            dest_y,
            src_x,
            src_y,
            width,
            height,
        }
    }

    /// Source coordinate for the offset `(x, y)` inside the block
    pub const fn source_at(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        offset(self.src_x, self.src_y, x, y)
    }

    /// Destination coordinate for the offset `(x, y)` inside the block
    pub const fn destination_at(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        offset(self.dest_x, self.dest_y, x, y)
    }
}

const fn offset(origin_x: u32, origin_y: u32, x: u32, y: u32) -> Option<(u32, u32)> {
    match (origin_x.checked_add(x), origin_y.checked_add(y)) {
        (Some(px), Some(py)) => Some((px, py)),
        _ => None,
    }
}

/// Second-layer head faces moved onto the base head layer
///
/// Order matters: regions are applied front to back and a later region sees
/// whatever earlier ones cleared or wrote.
pub const HEAD_OVERLAY: [Region; 6] = [
    Region::new(8, 0, 40, 0, 8, 8),
    Region::new(16, 0, 48, 0, 8, 8),
    Region::new(0, 8, 32, 8, 8, 8),
    Region::new(8, 8, 40, 8, 8, 8),
    Region::new(16, 8, 48, 8, 8, 8),
    Region::new(24, 8, 56, 8, 8, 8),
];
