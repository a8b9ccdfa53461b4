//! FILENAME: core/operations/src/ops/mod.rs
//! PURPOSE: The built-in operations.
//! CONTEXT: Each operation comes in two forms: a typed function that works on
//! engine entities directly (`groupby(&table, "items", ...)`), and a struct
//! implementing `Operation` that unpacks dispatcher arguments and calls it.

pub mod addcolumn;
pub mod addrasterband;
pub mod convertcolumndomain;
pub mod copycolumn;
pub mod groupby;

pub use addcolumn::{addcolumn, AddColumn};
pub use addrasterband::{addrasterband, AddRasterBand};
pub use convertcolumndomain::{convertcolumndomain, ConvertColumnDomain, TargetDomain};
pub use copycolumn::{copycolumn, CopyColumn};
pub use groupby::{groupby, GroupBy};

use engine::{RasterCoverage, Table};

use crate::argument::Argument;
use crate::definition::OperationMetadata;
use crate::error::{OpResult, OperationError};

// ============================================================================
// ARGUMENT ACCESS
// ============================================================================

fn argument<'a>(meta: &OperationMetadata, args: &'a [Argument], index: usize) -> OpResult<&'a Argument> {
    args.get(index).ok_or_else(|| OperationError::ArgumentCount {
        operation: meta.name.clone(),
        expected: meta.arity(),
        found: args.len(),
    })
}

fn mismatch(meta: &OperationMetadata, index: usize, arg: &Argument) -> OperationError {
    let parameter = meta.parameters.get(index);
    OperationError::ArgumentKind {
        operation: meta.name.clone(),
        parameter: parameter.map(|p| p.name.clone()).unwrap_or_default(),
        expected: parameter.map(|p| p.expected()).unwrap_or_default(),
        found: arg.kind(),
    }
}

pub(crate) fn table_arg<'a>(meta: &OperationMetadata, args: &'a [Argument], index: usize) -> OpResult<&'a Table> {
    let arg = argument(meta, args, index)?;
    arg.as_table().ok_or_else(|| mismatch(meta, index, arg))
}

pub(crate) fn raster_arg<'a>(
    meta: &OperationMetadata,
    args: &'a [Argument],
    index: usize,
) -> OpResult<&'a RasterCoverage> {
    let arg = argument(meta, args, index)?;
    arg.as_raster().ok_or_else(|| mismatch(meta, index, arg))
}

/// String argument; numbers are accepted in their printed form.
pub(crate) fn text_arg(meta: &OperationMetadata, args: &[Argument], index: usize) -> OpResult<String> {
    let arg = argument(meta, args, index)?;
    arg.to_text().ok_or_else(|| mismatch(meta, index, arg))
}

/// Optional trailing string argument.
pub(crate) fn optional_text_arg(
    meta: &OperationMetadata,
    args: &[Argument],
    index: usize,
) -> OpResult<Option<String>> {
    if index >= args.len() {
        return Ok(None);
    }
    text_arg(meta, args, index).map(Some)
}
