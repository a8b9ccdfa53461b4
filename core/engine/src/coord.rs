//! FILENAME: core/engine/src/coord.rs
//! PURPOSE: Pixel coordinates and raster extents.
//! CONTEXT: `x` is the column, `y` the row and `z` the band (layer) index,
//! all 0-based. Pixel data is laid out row-major per band, so the linear
//! offset of (x, y) within a band is `y * size.x + x`.

use serde::{Deserialize, Serialize};

/// Extent of a raster: columns (x), rows (y) and bands (z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Size {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Size { x, y, z }
    }

    /// Number of pixels in one band.
    pub fn band_len(&self) -> usize {
        self.x as usize * self.y as usize
    }

    /// True when the x/y extents match; the band count is ignored.
    pub fn same_extent(&self, other: &Size) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x < self.x && pixel.y < self.y && pixel.z < self.z
    }

    /// Linear offset of the pixel within its band.
    pub fn offset(&self, pixel: Pixel) -> usize {
        pixel.y as usize * self.x as usize + pixel.x as usize
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// A pixel position (x = column, y = row, z = band).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Pixel {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Pixel { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_len_and_offset() {
        let size = Size::new(15, 12, 1);
        assert_eq!(size.band_len(), 180);
        assert_eq!(size.offset(Pixel::new(0, 0, 0)), 0);
        assert_eq!(size.offset(Pixel::new(4, 9, 0)), 139);
    }

    #[test]
    fn test_contains() {
        let size = Size::new(15, 12, 2);
        assert!(size.contains(Pixel::new(14, 11, 1)));
        assert!(!size.contains(Pixel::new(15, 0, 0)));
        assert!(!size.contains(Pixel::new(0, 0, 2)));
    }

    #[test]
    fn test_same_extent_ignores_bands() {
        assert!(Size::new(15, 12, 1).same_extent(&Size::new(15, 12, 3)));
        assert!(!Size::new(15, 12, 1).same_extent(&Size::new(12, 15, 1)));
    }
}
