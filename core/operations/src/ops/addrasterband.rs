//! FILENAME: core/operations/src/ops/addrasterband.rs
//! PURPOSE: Stacks the bands of two raster coverages into a new coverage.

use engine::RasterCoverage;

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::{ArgumentKind, OperationMetadata, ParameterDef};
use crate::error::{OpResult, OperationError};
use crate::logging::log_debug;
use crate::ops::raster_arg;
use crate::registry::Operation;

const NAME: &str = "addrasterband";

/// Returns a coverage holding all bands of `first` followed by all bands of
/// `second`. Both must be initialized, share the x/y extent and have
/// compatible domains.
pub fn addrasterband(first: &RasterCoverage, second: &RasterCoverage) -> OpResult<RasterCoverage> {
    for (parameter, raster) in [("raster1", first), ("raster2", second)] {
        if !raster.is_valid() {
            return Err(OperationError::EmptyInput {
                operation: NAME.to_string(),
                parameter: parameter.to_string(),
            });
        }
    }

    let (a, b) = (first.size(), second.size());
    if !a.same_extent(&b) {
        return Err(OperationError::IncompatibleRasters(format!(
            "extent {} does not match {}",
            a, b
        )));
    }

    // first.domain() is Some for a valid raster
    if let Some(domain) = first.domain() {
        if let Some(band) = second
            .bands()
            .iter()
            .find(|band| !domain.is_compatible_with(band.domain()))
        {
            return Err(OperationError::IncompatibleRasters(format!(
                "domain '{}' cannot be combined with '{}'",
                band.domain().name(),
                domain.name()
            )));
        }
    }

    let mut output = RasterCoverage::with_extent(first.name(), a.x, a.y);
    for band in first.bands().iter().chain(second.bands()) {
        output.push_band(band.clone())?;
    }

    log_debug!("OPS", "addrasterband: {} + {} -> {}", a, b, output.size());
    Ok(output)
}

pub struct AddRasterBand {
    metadata: OperationMetadata,
}

impl AddRasterBand {
    pub fn new() -> Self {
        let metadata = OperationMetadata::new(
            NAME,
            "addrasterband(inputraster1,inputraster2)",
            "adds the bands of a second raster coverage to the bands of the first one",
            ArgumentKind::Raster,
        )
        .parameter(ParameterDef::new(
            "raster1",
            ArgumentKind::Raster,
            "coverage providing the first bands",
        ))
        .parameter(ParameterDef::new(
            "raster2",
            ArgumentKind::Raster,
            "coverage whose bands are appended; same extent and a compatible domain",
        ))
        .keywords(&["raster", "band", "merge"]);
        AddRasterBand { metadata }
    }
}

impl Default for AddRasterBand {
    fn default() -> Self {
        AddRasterBand::new()
    }
}

impl Operation for AddRasterBand {
    fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    fn execute(&self, args: &[Argument], _config: &EngineConfig) -> OpResult<OperationResult> {
        let first = raster_arg(&self.metadata, args, 0)?;
        let second = raster_arg(&self.metadata, args, 1)?;
        addrasterband(first, second).map(OperationResult::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Domain, Pixel, Size};

    fn numeric(x: u32, y: u32, fill: f64) -> RasterCoverage {
        let mut raster = RasterCoverage::with_size("r", Size::new(x, y, 1), Domain::numeric());
        raster.fill_band(0, |_, _| fill).unwrap();
        raster
    }

    #[test]
    fn test_bands_are_stacked_in_order() {
        let out = addrasterband(&numeric(3, 2, 1.0), &numeric(3, 2, 2.0)).unwrap();
        assert_eq!(out.size(), Size::new(3, 2, 2));
        assert_eq!(out.pix2value(Pixel::new(2, 1, 0)), 1.0);
        assert_eq!(out.pix2value(Pixel::new(2, 1, 1)), 2.0);
    }

    #[test]
    fn test_extent_mismatch() {
        let err = addrasterband(&numeric(3, 2, 1.0), &numeric(2, 3, 1.0)).unwrap_err();
        assert!(matches!(err, OperationError::IncompatibleRasters(_)));
    }

    #[test]
    fn test_uninitialized_input() {
        let err = addrasterband(&numeric(3, 2, 1.0), &RasterCoverage::new()).unwrap_err();
        assert!(matches!(err, OperationError::EmptyInput { .. }));
    }
}
