//! FILENAME: core/operations/src/symbol_table.rs
//! PURPOSE: Named entities that textual expressions can refer to.

use engine::{RasterCoverage, Table};
use rustc_hash::FxHashMap;

use crate::argument::Argument;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Argument>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Binds `name` to an entity, returning the previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Argument>) -> Option<Argument> {
        self.symbols.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.symbols.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Argument> {
        self.symbols.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.get(name).and_then(|arg| arg.as_table())
    }

    pub fn raster(&self, name: &str) -> Option<&RasterCoverage> {
        self.get(name).and_then(|arg| arg.as_raster())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
