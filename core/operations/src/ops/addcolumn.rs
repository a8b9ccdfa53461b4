//! FILENAME: core/operations/src/ops/addcolumn.rs
//! PURPOSE: Adds an undefined-filled column to a copy of a table.

use engine::{ColumnDefinition, Domain, Table};

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::{ArgumentKind, OperationMetadata, ParameterDef};
use crate::error::{OpResult, OperationError};
use crate::ops::{table_arg, text_arg};
use crate::registry::Operation;

const NAME: &str = "addcolumn";

pub fn addcolumn(table: &Table, name: &str, domain: Domain) -> OpResult<Table> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OperationError::illegal(NAME, "column name is blank"));
    }
    if table.column_index(name).is_some() {
        return Err(OperationError::DuplicateColumn(name.to_string()));
    }

    let mut output = table.clone();
    output.add_column(ColumnDefinition::new(name, domain, output.column_count()))?;
    Ok(output)
}

pub struct AddColumn {
    metadata: OperationMetadata,
}

impl AddColumn {
    pub fn new() -> Self {
        let metadata = OperationMetadata::new(
            NAME,
            "addcolumn(table,columnname,domain)",
            "adds a column with the given domain to a table; all its values are undefined",
            ArgumentKind::Table,
        )
        .parameter(
            ParameterDef::new("table", ArgumentKind::Table, "table to extend").allow_empty(),
        )
        .parameter(ParameterDef::new(
            "columnname",
            ArgumentKind::Text,
            "name of the new column; must not exist yet",
        ))
        .parameter(
            ParameterDef::new(
                "domain",
                ArgumentKind::Domain,
                "domain of the new column, or a system domain name",
            )
            .or(ArgumentKind::Text),
        )
        .keywords(&["table", "column"]);
        AddColumn { metadata }
    }
}

impl Default for AddColumn {
    fn default() -> Self {
        AddColumn::new()
    }
}

impl Operation for AddColumn {
    fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    fn execute(&self, args: &[Argument], _config: &EngineConfig) -> OpResult<OperationResult> {
        let table = table_arg(&self.metadata, args, 0)?;
        let name = text_arg(&self.metadata, args, 1)?;
        let domain = match args.get(2) {
            Some(Argument::Domain(domain)) => domain.clone(),
            _ => Domain::from_system_name(&text_arg(&self.metadata, args, 2)?)?,
        };
        addcolumn(table, &name, domain).map(OperationResult::from)
    }
}
