//! FILENAME: core/engine/src/raster.rs
//! PURPOSE: Multi-band raster coverage with a per-band domain.
//! CONTEXT: Each band is a dense, row-major grid of `f64` pixels of the same
//! x/y extent. Numeric bands store the value itself; thematic and identifier
//! bands store the item's index within the domain. Undefined pixels hold
//! `RUNDEF`.
//!
//! `RasterCoverage::new()` yields an uninitialized coverage (no extent, no
//! bands) that operations reject through `is_valid()`.

use serde::{Deserialize, Serialize};

use crate::coord::{Pixel, Size};
use crate::domain::Domain;
use crate::error::{EngineError, EngineResult};
use crate::value::{is_undefined_number, RUNDEF};

/// One layer of a raster coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    domain: Domain,
    data: Vec<f64>,
}

impl Band {
    /// Creates a band of `len` undefined pixels.
    pub fn new(domain: Domain, len: usize) -> Self {
        Band {
            domain,
            data: vec![RUNDEF; len],
        }
    }

    pub fn from_values(domain: Domain, data: Vec<f64>) -> Self {
        Band { domain, data }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    fn accepts(&self, value: f64) -> bool {
        if is_undefined_number(value) {
            return true;
        }
        match &self.domain {
            Domain::Numeric(range) => range.contains(value),
            Domain::Thematic(items) | Domain::Identifier(items) => {
                value >= 0.0 && value.fract() == 0.0 && (value as usize) < items.len()
            }
            Domain::Text => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RasterSnapshot")]
pub struct RasterCoverage {
    name: String,
    size: Size,
    bands: Vec<Band>,
}

impl RasterCoverage {
    /// Creates an uninitialized coverage.
    pub fn new() -> Self {
        RasterCoverage::default()
    }

    /// Creates a coverage of `size.z` undefined bands, all with `domain`.
    pub fn with_size(name: impl Into<String>, size: Size, domain: Domain) -> Self {
        let bands = (0..size.z)
            .map(|_| Band::new(domain.clone(), size.band_len()))
            .collect();
        RasterCoverage {
            name: name.into(),
            size,
            bands,
        }
    }

    /// Creates a coverage with the given x/y extent and no bands yet.
    pub fn with_extent(name: impl Into<String>, x: u32, y: u32) -> Self {
        RasterCoverage {
            name: name.into(),
            size: Size::new(x, y, 0),
            bands: Vec::new(),
        }
    }

    /// True when the coverage has a spatial extent and at least one band.
    pub fn is_valid(&self) -> bool {
        self.size.x > 0 && self.size.y > 0 && !self.bands.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Domain of the first band, if any.
    pub fn domain(&self) -> Option<&Domain> {
        self.bands.first().map(|b| b.domain())
    }

    pub fn band(&self, z: u32) -> Option<&Band> {
        self.bands.get(z as usize)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Appends a band on top of the stack.
    pub fn push_band(&mut self, band: Band) -> EngineResult<()> {
        let expected = self.size.band_len();
        if band.data.len() != expected {
            return Err(EngineError::BandSizeMismatch {
                expected,
                found: band.data.len(),
            });
        }
        self.bands.push(band);
        self.size.z = self.bands.len() as u32;
        Ok(())
    }

    /// Value of a pixel, or `RUNDEF` when the pixel is outside the coverage.
    pub fn pix2value(&self, pixel: Pixel) -> f64 {
        if !self.size.contains(pixel) {
            return RUNDEF;
        }
        self.bands[pixel.z as usize].data[self.size.offset(pixel)]
    }

    /// Item name of a pixel in a thematic or identifier band.
    pub fn item_at(&self, pixel: Pixel) -> Option<&str> {
        let value = self.pix2value(pixel);
        if is_undefined_number(value) {
            return None;
        }
        self.bands[pixel.z as usize]
            .domain
            .item_domain()
            .and_then(|items| items.item(value as usize))
    }

    pub fn set_pixel(&mut self, pixel: Pixel, value: f64) -> EngineResult<()> {
        if !self.size.contains(pixel) {
            return Err(EngineError::PixelOutOfRange {
                x: pixel.x,
                y: pixel.y,
                z: pixel.z,
                size: self.size.to_string(),
            });
        }
        let offset = self.size.offset(pixel);
        let band = &mut self.bands[pixel.z as usize];
        if !band.accepts(value) {
            return Err(EngineError::InvalidValue {
                value: value.to_string(),
                domain: band.domain.name().to_string(),
            });
        }
        band.data[offset] = if is_undefined_number(value) { RUNDEF } else { value };
        Ok(())
    }

    /// Sets a pixel of a thematic or identifier band by item name.
    pub fn set_item(&mut self, pixel: Pixel, item: &str) -> EngineResult<()> {
        let index = self
            .band(pixel.z)
            .and_then(|b| b.domain.item_domain())
            .and_then(|items| items.index_of(item))
            .ok_or_else(|| EngineError::InvalidValue {
                value: item.to_string(),
                domain: self
                    .band(pixel.z)
                    .map(|b| b.domain.name().to_string())
                    .unwrap_or_default(),
            })?;
        self.set_pixel(pixel, index as f64)
    }

    /// Fills band `z` by evaluating `f(x, y)` for every pixel.
    pub fn fill_band<F>(&mut self, z: u32, f: F) -> EngineResult<()>
    where
        F: Fn(u32, u32) -> f64,
    {
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                self.set_pixel(Pixel::new(x, y, z), f(x, y))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// SNAPSHOT LOADING
// ============================================================================

/// Serialized form of a coverage, checked before it becomes a `RasterCoverage`.
#[derive(Deserialize)]
struct RasterSnapshot {
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    bands: Vec<Band>,
}

impl TryFrom<RasterSnapshot> for RasterCoverage {
    type Error = EngineError;

    fn try_from(snapshot: RasterSnapshot) -> EngineResult<Self> {
        let size = snapshot.size;
        if size.z as usize != snapshot.bands.len() {
            return Err(EngineError::InvalidSnapshot(format!(
                "size {} declares {} bands, found {}",
                size,
                size.z,
                snapshot.bands.len()
            )));
        }

        let mut raster = RasterCoverage::with_extent(snapshot.name, size.x, size.y);
        for band in snapshot.bands {
            if let Some(&value) = band.data.iter().find(|v| !band.accepts(**v)) {
                return Err(EngineError::InvalidValue {
                    value: value.to_string(),
                    domain: band.domain.name().to_string(),
                });
            }
            raster.push_band(band)?;
        }
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coverage_is_invalid() {
        let raster = RasterCoverage::new();
        assert!(!raster.is_valid());
        assert_eq!(raster.size(), Size::new(0, 0, 0));
        assert!(raster.domain().is_none());
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut raster = RasterCoverage::with_size("small", Size::new(15, 12, 1), Domain::numeric());
        raster.set_pixel(Pixel::new(4, 9, 0), 1390.0).unwrap();

        assert!(raster.is_valid());
        assert_eq!(raster.pix2value(Pixel::new(4, 9, 0)), 1390.0);
        assert_eq!(raster.pix2value(Pixel::new(5, 9, 0)), RUNDEF);
        assert_eq!(raster.pix2value(Pixel::new(4, 9, 1)), RUNDEF);
    }

    #[test]
    fn test_set_pixel_out_of_range() {
        let mut raster = RasterCoverage::with_size("small", Size::new(2, 2, 1), Domain::numeric());
        let result = raster.set_pixel(Pixel::new(2, 0, 0), 1.0);
        assert!(matches!(result, Err(EngineError::PixelOutOfRange { .. })));
    }

    #[test]
    fn test_thematic_band_stores_item_index() {
        let domain = Domain::thematic("landuse", ["stone", "water"]).unwrap();
        let mut raster = RasterCoverage::with_size("lu", Size::new(2, 2, 1), domain);

        raster.set_item(Pixel::new(1, 1, 0), "water").unwrap();
        assert_eq!(raster.pix2value(Pixel::new(1, 1, 0)), 1.0);
        assert_eq!(raster.item_at(Pixel::new(1, 1, 0)), Some("water"));
        assert_eq!(raster.item_at(Pixel::new(0, 0, 0)), None);
        assert!(raster.set_pixel(Pixel::new(0, 0, 0), 2.0).is_err());
    }

    #[test]
    fn test_push_band_checks_extent() {
        let mut raster = RasterCoverage::with_extent("stack", 3, 2);
        assert!(raster.push_band(Band::new(Domain::numeric(), 6)).is_ok());
        assert_eq!(raster.size().z, 1);
        let result = raster.push_band(Band::new(Domain::numeric(), 5));
        assert_eq!(result, Err(EngineError::BandSizeMismatch { expected: 6, found: 5 }));
    }

    #[test]
    fn test_snapshot_with_missing_bands_is_rejected() {
        let json = r#"{
            "name": "broken",
            "size": { "x": 2, "y": 2, "z": 3 },
            "bands": [{ "domain": "Text", "data": [1.0, 2.0, 3.0, 4.0] }]
        }"#;
        let err = serde_json::from_str::<RasterCoverage>(json).unwrap_err();
        assert!(err.to_string().contains("declares 3 bands"));
    }

    #[test]
    fn test_snapshot_with_short_band_is_rejected() {
        let mut raster = RasterCoverage::with_size("r", Size::new(2, 2, 1), Domain::numeric());
        raster.fill_band(0, |x, y| (x + y) as f64).unwrap();

        let mut json = serde_json::to_value(&raster).unwrap();
        json["bands"][0]["data"] = serde_json::json!([1.0, 2.0]);
        assert!(serde_json::from_value::<RasterCoverage>(json).is_err());

        let restored: RasterCoverage =
            serde_json::from_value(serde_json::to_value(&raster).unwrap()).unwrap();
        assert_eq!(restored, raster);
        assert_eq!(restored.pix2value(Pixel::new(1, 1, 0)), 2.0);
    }

    #[test]
    fn test_fill_band() {
        let mut raster = RasterCoverage::with_size("ramp", Size::new(3, 2, 1), Domain::numeric());
        raster.fill_band(0, |x, y| (y * 10 + x) as f64).unwrap();
        assert_eq!(raster.pix2value(Pixel::new(2, 1, 0)), 12.0);
    }
}
