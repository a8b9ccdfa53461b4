//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the data model.
//! CONTEXT: Re-exports the entity types operated on by the `operations` crate:
//! values, domains, column definitions, tables and raster coverages.

pub mod column;
pub mod coord;
pub mod domain;
pub mod error;
pub mod raster;
pub mod table;
pub mod value;

// Re-export commonly used types at the crate root
pub use column::ColumnDefinition;
pub use coord::{Pixel, Size};
pub use domain::{Domain, ItemDomain, NumericRange, ValueType};
pub use error::{EngineError, EngineResult};
pub use raster::{Band, RasterCoverage};
pub use table::Table;
pub use value::{is_undefined_number, OrderedFloat, Value, ValueKey, IUNDEF, RUNDEF, SUNDEF};
