//! FILENAME: core/operations/src/ops/convertcolumndomain.rs
//! PURPOSE: Reinterprets the values of one column under a different domain.
//! CONTEXT: The column keeps its name and position. Cells that cannot be
//! represented in the target domain, and cells equal to the placeholder,
//! become undefined.

use engine::{Domain, ItemDomain, NumericRange, Table, Value};

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::{ArgumentKind, OperationMetadata, ParameterDef};
use crate::error::{OpResult, OperationError};
use crate::logging::log_debug;
use crate::ops::{optional_text_arg, table_arg, text_arg};
use crate::registry::Operation;

const NAME: &str = "convertcolumndomain";

/// Domain kinds a column can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDomain {
    Integer,
    Value,
    Identifier,
    Thematic,
    Text,
}

impl TargetDomain {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "integer" | "int" => Some(TargetDomain::Integer),
            "value" | "float" | "double" => Some(TargetDomain::Value),
            "identifier" => Some(TargetDomain::Identifier),
            "thematic" => Some(TargetDomain::Thematic),
            "text" | "string" => Some(TargetDomain::Text),
            _ => None,
        }
    }
}

pub fn convertcolumndomain(
    table: &Table,
    column: &str,
    target: TargetDomain,
    placeholder: &str,
) -> OpResult<Table> {
    if table.is_empty() {
        return Err(OperationError::EmptyInput {
            operation: NAME.to_string(),
            parameter: "table".to_string(),
        });
    }
    let source = table
        .column(column)
        .ok_or_else(|| OperationError::ColumnNotFound(column.to_string()))?;

    let placeholder = placeholder.trim();
    let cells: Vec<Option<&Value>> = source
        .iter()
        .map(|v| {
            let missing = v.is_undefined()
                || (!placeholder.is_empty() && v.display_value().trim() == placeholder);
            if missing {
                None
            } else {
                Some(v)
            }
        })
        .collect();

    let (domain, values) = match target {
        TargetDomain::Integer => {
            let range = NumericRange::integer();
            let values = cells
                .iter()
                .map(|cell| match cell.and_then(|v| to_number(v)) {
                    Some(n) if range.contains(n) => Value::Number(n),
                    _ => Value::Undefined,
                })
                .collect();
            (Domain::integer(), values)
        }
        TargetDomain::Value => {
            let values = cells
                .iter()
                .map(|cell| cell.and_then(|v| to_number(v)).map_or(Value::Undefined, Value::number))
                .collect();
            (Domain::numeric(), values)
        }
        TargetDomain::Identifier | TargetDomain::Thematic => {
            let names: Vec<Option<String>> = cells
                .iter()
                .map(|cell| {
                    cell.map(|v| v.display_value().trim().to_string())
                        .filter(|s| !s.is_empty())
                })
                .collect();
            let items = ItemDomain::from_distinct(column, names.iter().flatten().cloned());
            let domain = if target == TargetDomain::Identifier {
                Domain::Identifier(items)
            } else {
                Domain::Thematic(items)
            };
            let values = names
                .into_iter()
                .map(|name| name.map_or(Value::Undefined, Value::item))
                .collect();
            (domain, values)
        }
        TargetDomain::Text => {
            let values = cells
                .iter()
                .map(|cell| cell.map_or(Value::Undefined, |v| Value::text(v.display_value())))
                .collect();
            (Domain::text(), values)
        }
    };

    log_debug!("OPS", "convertcolumndomain {} -> {}", column, domain.name());

    let mut output = table.clone();
    output.set_column(column, domain, values)?;
    Ok(output)
}

/// Numeric reading of a cell: numbers as is, text when it parses as a number.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) | Value::Item(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Undefined => None,
    }
}

pub struct ConvertColumnDomain {
    metadata: OperationMetadata,
}

impl ConvertColumnDomain {
    pub fn new() -> Self {
        let metadata = OperationMetadata::new(
            NAME,
            "convertcolumndomain(table,columnname,integer|value|identifier|thematic|text[,placeholder])",
            "converts the values of a column to a new domain; unconvertible values become undefined",
            ArgumentKind::Table,
        )
        .parameter(ParameterDef::new("table", ArgumentKind::Table, "input table"))
        .parameter(ParameterDef::new(
            "columnname",
            ArgumentKind::Text,
            "column to convert",
        ))
        .parameter(ParameterDef::new(
            "targetdomain",
            ArgumentKind::Text,
            "integer, value, identifier, thematic or text",
        ))
        .parameter(
            ParameterDef::new(
                "placeholder",
                ArgumentKind::Text,
                "cell value that means 'no value'",
            )
            .or(ArgumentKind::Number)
            .optional()
            .allow_empty(),
        )
        .keywords(&["table", "column", "domain", "conversion"]);
        ConvertColumnDomain { metadata }
    }
}

impl Default for ConvertColumnDomain {
    fn default() -> Self {
        ConvertColumnDomain::new()
    }
}

impl Operation for ConvertColumnDomain {
    fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    fn execute(&self, args: &[Argument], config: &EngineConfig) -> OpResult<OperationResult> {
        let table = table_arg(&self.metadata, args, 0)?;
        let column = text_arg(&self.metadata, args, 1)?;
        let target_name = text_arg(&self.metadata, args, 2)?;
        let target = TargetDomain::parse(&target_name).ok_or_else(|| {
            OperationError::illegal(NAME, format!("unknown target domain '{}'", target_name))
        })?;
        let placeholder = optional_text_arg(&self.metadata, args, 3)?
            .unwrap_or_else(|| config.placeholder.clone());

        convertcolumndomain(table, &column, target, &placeholder).map(OperationResult::from)
    }
}
