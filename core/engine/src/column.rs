//! FILENAME: core/engine/src/column.rs
//! PURPOSE: Describes one column of a table: its name, domain and position.

use serde::{Deserialize, Serialize};

use crate::domain::{Domain, ValueType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    name: String,
    pub domain: Domain,
    index: usize,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, domain: Domain, index: usize) -> Self {
        ColumnDefinition {
            name: name.into(),
            domain,
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Position of the column within its table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value_type(&self) -> ValueType {
        self.domain.value_type()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}
