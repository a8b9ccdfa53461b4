//! FILENAME: core/operations/src/registry.rs
//! PURPOSE: Maps operation names to implementations.
//! CONTEXT: Names are stored lower case, so lookups are case-insensitive.
//! Callers can register their own operations next to the built-in ones.

use rustc_hash::FxHashMap;

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::OperationMetadata;
use crate::error::OpResult;
use crate::ops;

/// An executable operation.
///
/// `execute` is only called with arguments that already passed validation
/// against `metadata()`: the count is within range and every argument has an
/// accepted kind. Implementations must not assume anything beyond that.
pub trait Operation: Send + Sync {
    fn metadata(&self) -> &OperationMetadata;

    fn execute(&self, args: &[Argument], config: &EngineConfig) -> OpResult<OperationResult>;
}

#[derive(Default)]
pub struct OperationRegistry {
    operations: FxHashMap<String, Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Creates a registry without any operations.
    pub fn new() -> Self {
        OperationRegistry::default()
    }

    /// Creates a registry holding all built-in operations.
    pub fn with_builtins() -> Self {
        let mut registry = OperationRegistry::new();
        registry.register(Box::new(ops::AddRasterBand::new()));
        registry.register(Box::new(ops::AddColumn::new()));
        registry.register(Box::new(ops::GroupBy::new()));
        registry.register(Box::new(ops::ConvertColumnDomain::new()));
        registry.register(Box::new(ops::CopyColumn::new()));
        registry
    }

    /// Registers an operation under its metadata name.
    /// Returns the operation it replaced, if any.
    pub fn register(&mut self, operation: Box<dyn Operation>) -> Option<Box<dyn Operation>> {
        let key = operation.metadata().name.to_lowercase();
        self.operations.insert(key, operation)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Operation> {
        self.operations
            .get(&name.trim().to_lowercase())
            .map(|op| op.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Metadata of every registered operation, sorted by name.
    pub fn metadata(&self) -> Vec<&OperationMetadata> {
        let mut all: Vec<&OperationMetadata> =
            self.operations.values().map(|op| op.metadata()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_registered() {
        let registry = OperationRegistry::with_builtins();
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("addrasterband"));
        assert!(registry.contains("GroupBy"));
        assert!(!registry.contains("resample"));
    }

    #[test]
    fn test_metadata_is_sorted() {
        let registry = OperationRegistry::with_builtins();
        let names: Vec<&str> = registry.metadata().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["addcolumn", "addrasterband", "convertcolumndomain", "copycolumn", "groupby"]
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = OperationRegistry::with_builtins();
        let previous = registry.register(Box::new(ops::AddColumn::new()));
        assert!(previous.is_some());
        assert_eq!(registry.len(), 5);
    }
}
