//! FILENAME: core/operations/src/lib.rs
//! Operation subsystem: name-dispatched operations on tables and rasters.
//!
//! This crate holds the operations themselves and the machinery that runs
//! them. It depends on `engine` for the entities (Table, RasterCoverage,
//! Domain) and on `parser` for textual expressions.
//!
//! Layers:
//! - `definition`: Serializable description of operations (what an operation IS)
//! - `registry`: Name to implementation lookup
//! - `dispatcher`: Validation and dispatch (HOW a call is run)
//! - `ops`: The built-in operations
//! - `aggregate`: Reductions used by group-by
//!
//! ```ignore
//! let out = operations::execute("groupby", vec![table.into(), "items".into(), "sum".into()])?;
//! ```

pub mod logging;

pub mod aggregate;
pub mod argument;
pub mod config;
pub mod definition;
pub mod dispatcher;
pub mod error;
pub mod ops;
pub mod registry;
pub mod symbol_table;

pub use aggregate::AggregateAccumulator;
pub use argument::{Argument, OperationResult};
pub use config::{EngineConfig, GroupOrder};
pub use definition::{AggregationType, ArgumentKind, OperationMetadata, ParameterDef};
pub use dispatcher::{execute, Engine};
pub use error::{OpResult, OperationError};
pub use registry::{Operation, OperationRegistry};
pub use symbol_table::SymbolTable;
