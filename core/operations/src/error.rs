//! FILENAME: core/operations/src/error.rs

use engine::EngineError;
use parser::ParseError;
use thiserror::Error;

use crate::definition::ArgumentKind;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{operation}: expected {expected} argument(s), found {found}")]
    ArgumentCount {
        operation: String,
        expected: String,
        found: usize,
    },

    #[error("{operation}: argument '{parameter}' must be {expected}, found {found:?}")]
    ArgumentKind {
        operation: String,
        parameter: String,
        expected: String,
        found: ArgumentKind,
    },

    #[error("{operation}: argument '{parameter}' is empty or uninitialized")]
    EmptyInput {
        operation: String,
        parameter: String,
    },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column already exists: {0}")]
    DuplicateColumn(String),

    #[error("{operation}: {message}")]
    IllegalArgument { operation: String, message: String },

    #[error("Incompatible rasters: {0}")]
    IncompatibleRasters(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OperationError {
    pub(crate) fn illegal(operation: &str, message: impl Into<String>) -> Self {
        OperationError::IllegalArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

pub type OpResult<T> = Result<T, OperationError>;
