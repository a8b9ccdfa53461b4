//! FILENAME: core/operations/tests/common/mod.rs
//! Shared fixtures for the operation integration tests.

#![allow(dead_code)]

use engine::{Domain, Pixel, RasterCoverage, Size, Table, Value};
use operations::{Argument, Engine};

/// Thematic domain used by the test tables and the thematic raster.
pub fn landuse() -> Domain {
    Domain::thematic("landuse", ["stone", "houses", "water", "grass"]).unwrap()
}

/// Table with 7 columns and 6 records.
///
/// | items  | ints | reals | strings1 | strings2 | counts | ids |
/// |--------|------|-------|----------|----------|--------|-----|
/// | stone  | 22   | 1.5   | aap      | 100      | 1      | id1 |
/// | houses | 77   | 2.5   | noot     | 200      | 2      | id2 |
/// | water  | 72   | ?     | mies     | 300      | 3      | id3 |
/// | houses | 309  | 4.0   | wim      | 400      | 4      | id4 |
/// | water  | 309  | 5.5   | zus      | 500      | 5      | id5 |
/// | houses | 190  | 6.0   | jet      | ?        | 6      | id6 |
pub fn test_table() -> Table {
    let mut table = Table::with_name("testtable");
    table.add_column_with("items", landuse()).unwrap();
    table.add_column_with("ints", Domain::integer()).unwrap();
    table.add_column_with("reals", Domain::numeric()).unwrap();
    table.add_column_with("strings1", Domain::text()).unwrap();
    table.add_column_with("strings2", Domain::text()).unwrap();
    table.add_column_with("counts", Domain::count()).unwrap();
    table
        .add_column_with(
            "ids",
            Domain::identifier("ids", ["id1", "id2", "id3", "id4", "id5", "id6"]).unwrap(),
        )
        .unwrap();

    table
        .set_cells("items", ["stone", "houses", "water", "houses", "water", "houses"])
        .unwrap();
    table.set_cells("ints", [22, 77, 72, 309, 309, 190]).unwrap();
    table
        .set_cells(
            "reals",
            [
                Value::Number(1.5),
                Value::Number(2.5),
                Value::Undefined,
                Value::Number(4.0),
                Value::Number(5.5),
                Value::Number(6.0),
            ],
        )
        .unwrap();
    table
        .set_cells("strings1", ["aap", "noot", "mies", "wim", "zus", "jet"])
        .unwrap();
    table
        .set_cells("strings2", ["100", "200", "300", "400", "500", "?"])
        .unwrap();
    table.set_cells("counts", [1, 2, 3, 4, 5, 6]).unwrap();
    table
        .set_cells("ids", ["id1", "id2", "id3", "id4", "id5", "id6"])
        .unwrap();
    table
}

/// Table keyed on the thematic `items` column.
pub fn keyed_test_table() -> Table {
    let mut table = Table::with_name("keyed");
    table.add_column_with("items", landuse()).unwrap();
    table.add_column_with("ints", Domain::integer()).unwrap();
    table
        .set_cells("items", ["stone", "water", "houses", "grass"])
        .unwrap();
    table.set_cells("ints", [10, 20, 30, 40]).unwrap();
    table
}

/// 15x12x1 numeric raster; pixel (x, y) holds (y * 15 + x) * 10 + offset.
pub fn small_numeric_raster(offset: f64) -> RasterCoverage {
    let mut raster = RasterCoverage::with_size("small", Size::new(15, 12, 1), Domain::numeric());
    raster
        .fill_band(0, |x, y| (y * 15 + x) as f64 * 10.0 + offset)
        .unwrap();
    raster
}

/// 15x12x1 thematic raster over `landuse`.
pub fn small_thematic_raster() -> RasterCoverage {
    let mut raster = RasterCoverage::with_size("thematic", Size::new(15, 12, 1), landuse());
    raster.fill_band(0, |x, y| ((x + y) % 4) as f64).unwrap();
    raster
}

pub fn pixel(x: u32, y: u32, z: u32) -> Pixel {
    Pixel::new(x, y, z)
}

/// Runs an operation on a fresh engine and unwraps the table result.
pub fn run_table(name: &str, args: Vec<Argument>) -> Table {
    Engine::new()
        .execute(name, args)
        .unwrap_or_else(|e| panic!("{} failed: {}", name, e))
        .into_table()
        .expect("table result")
}
