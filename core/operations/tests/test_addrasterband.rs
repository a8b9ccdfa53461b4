//! FILENAME: core/operations/tests/test_addrasterband.rs
//! Integration tests for addrasterband.

mod common;

use common::{pixel, small_numeric_raster, small_thematic_raster};
use engine::{RasterCoverage, Size};
use operations::{execute, Argument, OperationError};

#[test]
fn test_bands_of_two_rasters_are_stacked() {
    let rc1 = small_numeric_raster(0.0);
    let rc2 = small_numeric_raster(10000.0);

    let rc3 = execute("addrasterband", vec![rc1.clone().into(), rc2.into()])
        .unwrap()
        .into_raster()
        .unwrap();

    assert_eq!(rc3.size(), Size::new(15, 12, 2));
    assert_eq!(rc3.pix2value(pixel(4, 9, 0)), 1390.0);
    assert_eq!(rc3.pix2value(pixel(4, 9, 1)), 11390.0);

    // input untouched
    assert_eq!(rc1.size(), Size::new(15, 12, 1));
}

#[test]
fn test_uninitialized_raster_is_rejected_in_either_position() {
    let rc1 = small_numeric_raster(0.0);
    let rc4 = RasterCoverage::new();

    let err = execute("addrasterband", vec![rc1.clone().into(), rc4.clone().into()]).unwrap_err();
    assert!(matches!(err, OperationError::EmptyInput { .. }));

    let err = execute("addrasterband", vec![rc4.into(), rc1.into()]).unwrap_err();
    assert!(matches!(err, OperationError::EmptyInput { .. }));
}

#[test]
fn test_numeric_and_thematic_do_not_mix() {
    let err = execute(
        "addrasterband",
        vec![small_numeric_raster(0.0).into(), small_thematic_raster().into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::IncompatibleRasters(_)));
}

#[test]
fn test_thematic_bands_with_same_items_combine() {
    let out = execute(
        "addrasterband",
        vec![small_thematic_raster().into(), small_thematic_raster().into()],
    )
    .unwrap()
    .into_raster()
    .unwrap();

    assert_eq!(out.band_count(), 2);
    assert_eq!(out.item_at(pixel(1, 1, 1)), Some("water"));
}

#[test]
fn test_different_extent_is_rejected() {
    let mut other = RasterCoverage::with_size("other", Size::new(12, 15, 1), engine::Domain::numeric());
    other.fill_band(0, |_, _| 1.0).unwrap();

    let err = execute("addrasterband", vec![small_numeric_raster(0.0).into(), other.into()]).unwrap_err();
    assert!(matches!(err, OperationError::IncompatibleRasters(_)));
}

#[test]
fn test_table_argument_is_a_kind_error() {
    let err = execute(
        "addrasterband",
        vec![small_numeric_raster(0.0).into(), Argument::from(common::test_table())],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::ArgumentKind { .. }));
}
