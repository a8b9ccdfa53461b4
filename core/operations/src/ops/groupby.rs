//! FILENAME: core/operations/src/ops/groupby.rs
//! Group By - Collapses records sharing a key into one record per key.
//!
//! Algorithm:
//! 1. Walk the records once, assigning each distinct key a group slot
//!    (first-seen order) and feeding every numeric column into that
//!    group's accumulators
//! 2. Optionally sort the groups by key
//! 3. Emit the key column followed by one reduced column per numeric column
//!
//! Undefined cells are skipped by the accumulators. A group without any
//! defined value in a column gets an undefined result there. Records with an
//! undefined key form a group of their own.

use engine::{Domain, Table, Value, ValueKey};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::aggregate::AggregateAccumulator;
use crate::argument::{Argument, OperationResult};
use crate::config::{EngineConfig, GroupOrder};
use crate::definition::{AggregationType, ArgumentKind, OperationMetadata, ParameterDef};
use crate::error::{OpResult, OperationError};
use crate::logging::log_debug;
use crate::ops::{table_arg, text_arg};
use crate::registry::Operation;

const NAME: &str = "groupby";

/// Per-group state: the key as found in the table plus one accumulator per
/// aggregated column.
struct Group {
    key: Value,
    accumulators: SmallVec<[AggregateAccumulator; 4]>,
}

pub fn groupby(
    table: &Table,
    key_column: &str,
    aggregation: AggregationType,
    order: GroupOrder,
) -> OpResult<Table> {
    if table.is_empty() {
        return Err(OperationError::EmptyInput {
            operation: NAME.to_string(),
            parameter: "table".to_string(),
        });
    }
    let key_index = table
        .column_index(key_column)
        .ok_or_else(|| OperationError::ColumnNotFound(key_column.to_string()))?;

    // Columns that get reduced: every numeric column except the key.
    let aggregated: Vec<usize> = table
        .column_definitions()
        .iter()
        .filter(|c| c.index() != key_index && c.domain().is_numeric())
        .map(|c| c.index())
        .collect();

    let keys = table.column_at(key_index).unwrap_or_default();
    let mut slots: FxHashMap<ValueKey, usize> = FxHashMap::default();
    let mut groups: Vec<Group> = Vec::new();

    for (record, key) in keys.iter().enumerate() {
        let slot = *slots.entry(key.key()).or_insert_with(|| {
            groups.push(Group {
                key: key.clone(),
                accumulators: aggregated.iter().map(|_| AggregateAccumulator::new()).collect(),
            });
            groups.len() - 1
        });

        for (acc, &column) in groups[slot].accumulators.iter_mut().zip(&aggregated) {
            if let Some(Value::Number(n)) = table.cell_at(column, record) {
                acc.add_number(*n);
            }
        }
    }

    if order == GroupOrder::Ascending {
        groups.sort_by_key(|g| g.key.key());
    }

    log_debug!(
        "OPS",
        "groupby {}: {} records -> {} groups ({})",
        key_column,
        table.record_count(),
        groups.len(),
        aggregation.name()
    );

    let mut output = Table::with_name(table.name());
    output.set_record_count(groups.len());

    let key_domain = table
        .column_definition_at(key_index)
        .map(|c| c.domain().clone())
        .unwrap_or_default();
    output.set_column(
        key_column,
        key_domain,
        groups.iter().map(|g| g.key.clone()).collect(),
    )?;

    for (slot, &column) in aggregated.iter().enumerate() {
        let Some(definition) = table.column_definition_at(column) else {
            continue;
        };
        let integer = definition
            .domain()
            .numeric_range()
            .map_or(false, |r| r.is_integer());
        let mut values = Vec::with_capacity(groups.len());
        for group in &groups {
            let value = match group.accumulators[slot].compute(aggregation, integer) {
                None => Value::Undefined,
                Some(v) if !v.is_finite() => {
                    return Err(OperationError::illegal(
                        NAME,
                        format!(
                            "{} of column '{}' overflows for key '{}'",
                            aggregation.name(),
                            definition.name(),
                            group.key.display_value()
                        ),
                    ));
                }
                Some(v) => Value::number(v),
            };
            values.push(value);
        }
        output.set_column(definition.name(), result_domain(definition.domain(), aggregation), values)?;
    }

    Ok(output)
}

/// Sums of a bounded integer column can leave its range; they are stored
/// in an unbounded integer domain instead.
fn result_domain(domain: &Domain, aggregation: AggregationType) -> Domain {
    match (domain, aggregation) {
        (Domain::Numeric(range), AggregationType::Sum) if range.is_integer() => {
            Domain::Numeric(engine::NumericRange::new(f64::MIN, f64::MAX, 1.0))
        }
        (Domain::Numeric(range), AggregationType::Sum) => {
            Domain::Numeric(engine::NumericRange::new(f64::MIN, f64::MAX, range.resolution))
        }
        _ => domain.clone(),
    }
}

pub struct GroupBy {
    metadata: OperationMetadata,
}

impl GroupBy {
    pub fn new() -> Self {
        let metadata = OperationMetadata::new(
            NAME,
            "groupby(table,keycolumn,sum|average|maximum|minimum)",
            "aggregates the numeric columns of a table per distinct value of a key column",
            ArgumentKind::Table,
        )
        .parameter(ParameterDef::new("table", ArgumentKind::Table, "table to group"))
        .parameter(ParameterDef::new(
            "keycolumn",
            ArgumentKind::Text,
            "column whose distinct values define the groups",
        ))
        .parameter(ParameterDef::new(
            "aggregation",
            ArgumentKind::Text,
            "sum, average, maximum or minimum",
        ))
        .keywords(&["table", "aggregation", "group"]);
        GroupBy { metadata }
    }
}

impl Default for GroupBy {
    fn default() -> Self {
        GroupBy::new()
    }
}

impl Operation for GroupBy {
    fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }

    fn execute(&self, args: &[Argument], config: &EngineConfig) -> OpResult<OperationResult> {
        let table = table_arg(&self.metadata, args, 0)?;
        let key_column = text_arg(&self.metadata, args, 1)?;
        let keyword = text_arg(&self.metadata, args, 2)?;
        let aggregation = AggregationType::parse(&keyword).ok_or_else(|| {
            OperationError::illegal(NAME, format!("unknown aggregation '{}'", keyword))
        })?;
        groupby(table, &key_column, aggregation, config.group_order).map(OperationResult::from)
    }
}
