//! FILENAME: core/operations/src/ops/copycolumn.rs
//! PURPOSE: Copies a column from one table into a copy of another.
//! CONTEXT: Two modes:
//! - positional: record i of the new column is record i of the source column
//! - keyed: record i takes the value of the first source record whose key
//!   equals the destination's key in record i; no match leaves it undefined
//!
//! Keys compare by `ValueKey`, so a text key matches an item key of the same name.

use engine::{Table, Value, ValueKey};
use rustc_hash::FxHashMap;

use crate::argument::{Argument, OperationResult};
use crate::config::EngineConfig;
use crate::definition::{ArgumentKind, OperationMetadata, ParameterDef};
use crate::error::{OpResult, OperationError};
use crate::logging::log_debug;
use crate::ops::{optional_text_arg, table_arg, text_arg};
use crate::registry::Operation;

const NAME: &str = "copycolumn";

/// Copies `src_column` of `src` into `dst_column` of a copy of `dst`.
///
/// `keys` holds the source and destination key column names for a keyed
/// copy; `None` copies by position. An existing `dst_column` is replaced.
/// When `dst` has no columns the result takes the source's record count.
pub fn copycolumn(
    src: &Table,
    src_column: &str,
    dst: &Table,
    dst_column: &str,
    keys: Option<(&str, &str)>,
) -> OpResult<Table> {
    if src.is_empty() {
        return Err(OperationError::EmptyInput {
            operation: NAME.to_string(),
            parameter: "source".to_string(),
        });
    }
    let definition = src
        .column_definition(src_column)
        .ok_or_else(|| OperationError::ColumnNotFound(src_column.to_string()))?;
    let source = src.column(src_column).unwrap_or_default();

    let dst_column = dst_column.trim();
    if dst_column.is_empty() {
        return Err(OperationError::illegal(NAME, "target column name is blank"));
    }

    let mut output = dst.clone();
    if output.is_empty() {
        output.set_record_count(src.record_count());
    }

    let values: Vec<Value> = match keys {
        None => source.to_vec(),
        Some((src_key, dst_key)) => {
            let src_keys = src
                .column(src_key)
                .ok_or_else(|| OperationError::ColumnNotFound(src_key.to_string()))?;
            let dst_keys = dst
                .column(dst_key)
                .ok_or_else(|| OperationError::ColumnNotFound(dst_key.to_string()))?;

            // First source record per key.
            let mut lookup: FxHashMap<ValueKey, usize> = FxHashMap::default();
            for (record, key) in src_keys.iter().enumerate() {
                if !key.is_undefined() {
                    lookup.entry(key.key()).or_insert(record);
                }
            }

            dst_keys
                .iter()
                .map(|key| {
                    if key.is_undefined() {
                        return Value::Undefined;
                    }
                    lookup
                        .get(&key.key())
                        .and_then(|&record| source.get(record))
                        .cloned()
                        .unwrap_or(Value::Undefined)
                })
                .collect()
        }
    };

    log_debug!(
        "OPS",
        "copycolumn {} -> {} ({} mode, {} records)",
        src_column,
        dst_column,
        if keys.is_some() { "keyed" } else { "positional" },
        output.record_count()
    );

    output.set_column(dst_column, definition.domain().clone(), values)?;
    Ok(output)
}

pub struct CopyColumn {
    metadata: OperationMetadata,
}

impl CopyColumn {
    pub fn new() -> Self {
        let metadata = OperationMetadata::new(
            NAME,
            "copycolumn(sourcetable,sourcecolumn,targettable,targetcolumn[,sourcekey,targetkey])",
            "copies a column into a target table, by record position or by matching key columns",
            ArgumentKind::Table,
        )
        .parameter(ParameterDef::new("source", ArgumentKind::Table, "table to copy from"))
        .parameter(ParameterDef::new(
            "sourcecolumn",
            ArgumentKind::Text,
            "column to copy",
        ))
        .parameter(
            ParameterDef::new("target", ArgumentKind::Table, "table receiving the column")
                .allow_empty(),
        )
        .parameter(ParameterDef::new(
            "targetcolumn",
            ArgumentKind::Text,
            "name of the column in the result",
        ))
        .parameter(
            ParameterDef::new("sourcekey", ArgumentKind::Text, "key column of the source table")
                .optional()
                .allow_empty(),
        )
        .parameter(
            ParameterDef::new("targetkey", ArgumentKind::Text, "key column of the target table")
                .optional()
                .allow_empty(),
        )
        .keywords(&["table", "column", "join"]);
        CopyColumn { metadata }
    }
}

impl Default for CopyColumn {
    fn default() -> Self {
        CopyColumn::new()
    }
}

impl Operation for CopyColumn {
    fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    fn execute(&self, args: &[Argument], config: &EngineConfig) -> OpResult<OperationResult> {
        let src = table_arg(&self.metadata, args, 0)?;
        let src_column = text_arg(&self.metadata, args, 1)?;
        let dst = table_arg(&self.metadata, args, 2)?;
        let dst_column = text_arg(&self.metadata, args, 3)?;

        // A key counts only when given, non-blank and not the placeholder.
        let key = |index: usize| -> OpResult<Option<String>> {
            Ok(optional_text_arg(&self.metadata, args, index)?
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty() && !config.is_placeholder(k)))
        };
        let (src_key, dst_key) = (key(4)?, key(5)?);
        let keys = match (&src_key, &dst_key) {
            (Some(s), Some(d)) => Some((s.as_str(), d.as_str())),
            _ => None,
        };

        copycolumn(src, &src_column, dst, &dst_column, keys).map(OperationResult::from)
    }
}
