//! FILENAME: core/engine/src/table.rs
//! PURPOSE: Manages a collection of domain-typed columns over a shared record index.
//! CONTEXT: Storage is column-major (one `Vec<Value>` per column), which keeps
//! whole-column operations such as grouping, conversion and copying cheap.
//! Every column always holds exactly `record_count` values; missing data is
//! stored as `Value::Undefined`.
//!
//! A table without columns is the "empty" table. Operations that need data
//! check `is_empty()` before doing any work.

use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;
use crate::domain::Domain;
use crate::error::{EngineError, EngineResult};
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableSnapshot")]
pub struct Table {
    name: String,
    columns: Vec<ColumnDefinition>,
    /// Column-major cell storage, parallel to `columns`.
    data: Vec<Vec<Value>>,
    record_count: usize,
}

impl Table {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        Table::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            ..Table::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// True when the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // ========================================================================
    // COLUMN DEFINITIONS
    // ========================================================================

    pub fn column_definitions(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column_definition(&self, name: &str) -> Option<&ColumnDefinition> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    pub fn column_definition_at(&self, index: usize) -> Option<&ColumnDefinition> {
        self.columns.get(index)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Appends a column, filled with undefined values for all existing records.
    /// The definition's index is overwritten with its actual position.
    pub fn add_column(&mut self, mut definition: ColumnDefinition) -> EngineResult<usize> {
        let name = definition.name().to_string();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidColumnName(name));
        }
        if self.column_index(&name).is_some() {
            return Err(EngineError::DuplicateColumn(name));
        }

        let index = self.columns.len();
        definition.set_index(index);
        self.data.push(vec![definition.domain.undefined(); self.record_count]);
        self.columns.push(definition);
        Ok(index)
    }

    /// Convenience wrapper around `add_column`.
    pub fn add_column_with(&mut self, name: impl Into<String>, domain: Domain) -> EngineResult<usize> {
        self.add_column(ColumnDefinition::new(name, domain, 0))
    }

    /// Installs a whole column. An existing column with the same name has its
    /// domain and values replaced in place; otherwise the column is appended.
    /// `values` is padded with undefined (or cut) to the record count.
    pub fn set_column(
        &mut self,
        name: &str,
        domain: Domain,
        values: Vec<Value>,
    ) -> EngineResult<usize> {
        let mut canonical = Vec::with_capacity(self.record_count);
        for value in values.into_iter().take(self.record_count) {
            canonical.push(canonicalize(&domain, &value)?);
        }
        canonical.resize(self.record_count, Value::Undefined);

        let index = match self.column_index(name) {
            Some(idx) => {
                self.columns[idx].domain = domain;
                idx
            }
            None => self.add_column(ColumnDefinition::new(name, domain, 0))?,
        };
        self.data[index] = canonical;
        Ok(index)
    }

    // ========================================================================
    // RECORDS & CELLS
    // ========================================================================

    /// Grows or shrinks every column to `count` records.
    pub fn set_record_count(&mut self, count: usize) {
        for column in &mut self.data {
            column.resize(count, Value::Undefined);
        }
        self.record_count = count;
    }

    pub fn cell(&self, column: &str, record: usize) -> Option<&Value> {
        self.column_index(column)
            .and_then(|idx| self.cell_at(idx, record))
    }

    pub fn cell_at(&self, column: usize, record: usize) -> Option<&Value> {
        self.data.get(column).and_then(|c| c.get(record))
    }

    /// Sets a single cell, coercing the value into the column's domain.
    /// Writing past the last record grows the table.
    pub fn set_cell(&mut self, column: &str, record: usize, value: impl Into<Value>) -> EngineResult<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;
        self.set_cell_at(idx, record, value)
    }

    pub fn set_cell_at(&mut self, column: usize, record: usize, value: impl Into<Value>) -> EngineResult<()> {
        let definition = self
            .columns
            .get(column)
            .ok_or(EngineError::ColumnIndexOutOfRange {
                index: column,
                count: self.columns.len(),
            })?;
        let value = canonicalize(&definition.domain, &value.into())?;

        if record >= self.record_count {
            self.set_record_count(record + 1);
        }
        self.data[column][record] = value;
        Ok(())
    }

    /// Sets consecutive cells of a column starting at record 0.
    pub fn set_cells<I, V>(&mut self, column: &str, values: I) -> EngineResult<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let idx = self
            .column_index(column)
            .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;
        for (record, value) in values.into_iter().enumerate() {
            self.set_cell_at(idx, record, value)?;
        }
        Ok(())
    }

    /// All values of a column, in record order.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.column_index(name).map(|idx| self.data[idx].as_slice())
    }

    pub fn column_at(&self, index: usize) -> Option<&[Value]> {
        self.data.get(index).map(|c| c.as_slice())
    }

    /// All values of a record, in column order.
    pub fn record(&self, record: usize) -> Option<Vec<Value>> {
        if record >= self.record_count {
            return None;
        }
        Some(self.data.iter().map(|c| c[record].clone()).collect())
    }
}

// ============================================================================
// SNAPSHOT LOADING
// ============================================================================

/// Serialized form of a table, checked before it becomes a `Table`.
#[derive(Deserialize)]
struct TableSnapshot {
    #[serde(default)]
    name: String,
    #[serde(default)]
    columns: Vec<ColumnDefinition>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
    #[serde(default)]
    record_count: usize,
}

impl TryFrom<TableSnapshot> for Table {
    type Error = EngineError;

    fn try_from(snapshot: TableSnapshot) -> EngineResult<Self> {
        if snapshot.data.len() != snapshot.columns.len() {
            return Err(EngineError::InvalidSnapshot(format!(
                "{} columns but {} data columns",
                snapshot.columns.len(),
                snapshot.data.len()
            )));
        }

        let mut table = Table::with_name(snapshot.name);
        table.set_record_count(snapshot.record_count);
        for (definition, values) in snapshot.columns.into_iter().zip(snapshot.data) {
            if values.len() != snapshot.record_count {
                return Err(EngineError::InvalidSnapshot(format!(
                    "column '{}' has {} values, expected {}",
                    definition.name(),
                    values.len(),
                    snapshot.record_count
                )));
            }
            let domain = definition.domain.clone();
            let index = table.add_column(definition)?;
            for (record, value) in values.iter().enumerate() {
                table.data[index][record] = canonicalize(&domain, value)?;
            }
        }
        Ok(table)
    }
}

fn canonicalize(domain: &Domain, value: &Value) -> EngineResult<Value> {
    domain
        .to_canonical(value)
        .ok_or_else(|| EngineError::InvalidValue {
            value: value.display_value(),
            domain: domain.name().to_string(),
        })
}
