//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Column already exists: {0}")]
    DuplicateColumn(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column index {index} out of range (table has {count} columns)")]
    ColumnIndexOutOfRange { index: usize, count: usize },

    #[error("Invalid column name: '{0}'")]
    InvalidColumnName(String),

    #[error("Value '{value}' is not valid in domain '{domain}'")]
    InvalidValue { value: String, domain: String },

    #[error("Unknown system domain: {0}")]
    UnknownDomain(String),

    #[error("Duplicate item '{item}' in domain '{domain}'")]
    DuplicateItem { item: String, domain: String },

    #[error("Pixel ({x}, {y}, {z}) outside raster of size {size}")]
    PixelOutOfRange { x: u32, y: u32, z: u32, size: String },

    #[error("Band has {found} pixels, expected {expected}")]
    BandSizeMismatch { expected: usize, found: usize },

    #[error("Inconsistent snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
