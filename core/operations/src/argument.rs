//! FILENAME: core/operations/src/argument.rs
//! PURPOSE: Values passed into and returned from operations.
//! CONTEXT: The dispatcher is dynamically typed: every operation takes a list
//! of `Argument`s and produces an `OperationResult`. The argument's kind is
//! checked against the operation's metadata before the operation runs.

use engine::{Domain, RasterCoverage, Table};

use crate::definition::ArgumentKind;

/// A single positional argument of an operation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Table(Table),
    Raster(RasterCoverage),
    Domain(Domain),
    Text(String),
    Number(f64),
}

impl Argument {
    pub fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Table(_) => ArgumentKind::Table,
            Argument::Raster(_) => ArgumentKind::Raster,
            Argument::Domain(_) => ArgumentKind::Domain,
            Argument::Text(_) => ArgumentKind::Text,
            Argument::Number(_) => ArgumentKind::Number,
        }
    }

    /// True for tables without columns, uninitialized rasters and blank strings.
    pub fn is_empty(&self) -> bool {
        match self {
            Argument::Table(table) => table.is_empty(),
            Argument::Raster(raster) => !raster.is_valid(),
            Argument::Text(text) => text.trim().is_empty(),
            Argument::Domain(_) | Argument::Number(_) => false,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Argument::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_raster(&self) -> Option<&RasterCoverage> {
        match self {
            Argument::Raster(raster) => Some(raster),
            _ => None,
        }
    }

    pub fn as_domain(&self) -> Option<&Domain> {
        match self {
            Argument::Domain(domain) => Some(domain),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Argument::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text for string arguments, the printed number for numeric ones.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Argument::Text(text) => Some(text.clone()),
            Argument::Number(n) => Some(engine::Value::Number(*n).display_value()),
            _ => None,
        }
    }
}

impl From<Table> for Argument {
    fn from(table: Table) -> Self {
        Argument::Table(table)
    }
}

impl From<RasterCoverage> for Argument {
    fn from(raster: RasterCoverage) -> Self {
        Argument::Raster(raster)
    }
}

impl From<Domain> for Argument {
    fn from(domain: Domain) -> Self {
        Argument::Domain(domain)
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

impl From<f64> for Argument {
    fn from(n: f64) -> Self {
        Argument::Number(n)
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// The entity produced by a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Table(Table),
    Raster(RasterCoverage),
}

impl OperationResult {
    pub fn kind(&self) -> ArgumentKind {
        match self {
            OperationResult::Table(_) => ArgumentKind::Table,
            OperationResult::Raster(_) => ArgumentKind::Raster,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            OperationResult::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_raster(&self) -> Option<&RasterCoverage> {
        match self {
            OperationResult::Raster(raster) => Some(raster),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Table> {
        match self {
            OperationResult::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_raster(self) -> Option<RasterCoverage> {
        match self {
            OperationResult::Raster(raster) => Some(raster),
            _ => None,
        }
    }
}

impl From<Table> for OperationResult {
    fn from(table: Table) -> Self {
        OperationResult::Table(table)
    }
}

impl From<RasterCoverage> for OperationResult {
    fn from(raster: RasterCoverage) -> Self {
        OperationResult::Raster(raster)
    }
}

impl From<OperationResult> for Argument {
    fn from(result: OperationResult) -> Self {
        match result {
            OperationResult::Table(table) => Argument::Table(table),
            OperationResult::Raster(raster) => Argument::Raster(raster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arguments() {
        assert!(Argument::from(Table::new()).is_empty());
        assert!(Argument::from(RasterCoverage::new()).is_empty());
        assert!(Argument::from("  ").is_empty());
        assert!(!Argument::from("items").is_empty());
        assert!(!Argument::from(Domain::numeric()).is_empty());
    }

    #[test]
    fn test_number_to_text() {
        assert_eq!(Argument::Number(200.0).to_text(), Some("200".to_string()));
        assert_eq!(Argument::from("?").to_text(), Some("?".to_string()));
        assert_eq!(Argument::from(Table::new()).to_text(), None);
    }

    #[test]
    fn test_result_conversion() {
        let result = OperationResult::from(Table::with_name("t"));
        assert_eq!(result.kind(), ArgumentKind::Table);
        assert!(result.as_raster().is_none());
        assert_eq!(Argument::from(result).kind(), ArgumentKind::Table);
    }
}
