//! FILENAME: core/operations/tests/test_convertcolumndomain.rs
//! Integration tests for convertcolumndomain.

mod common;

use common::{run_table, test_table};
use engine::{Table, Value, ValueType, RUNDEF};
use operations::{execute, Argument, OperationError};

fn convert(column: &str, target: &str) -> Table {
    run_table(
        "convertcolumndomain",
        vec![test_table().into(), column.into(), target.into(), "?".into()],
    )
}

#[test]
fn test_numeric_strings_become_integers() {
    let tbl = convert("strings2", "integer");

    assert_eq!(tbl.cell("strings2", 1), Some(&Value::Number(200.0)));
    assert_eq!(tbl.cell("strings2", 1).unwrap().as_number(), 200.0);
    assert_eq!(tbl.column_definition("strings2").unwrap().value_type(), ValueType::Int32);
    // placeholder cell
    assert_eq!(tbl.cell("strings2", 5), Some(&Value::Undefined));
}

#[test]
fn test_pure_strings_do_not_convert_to_integers() {
    let tbl = convert("strings1", "integer");
    assert_eq!(tbl.cell("strings1", 1).unwrap().as_number(), RUNDEF);
}

#[test]
fn test_strings_become_identifiers() {
    let tbl = convert("strings1", "identifier");

    assert_eq!(tbl.cell("strings1", 1), Some(&Value::item("noot")));
    assert_eq!(tbl.cell("strings1", 1).unwrap().display_value(), "noot");
    let definition = tbl.column_definition("strings1").unwrap();
    assert_eq!(definition.value_type(), ValueType::NamedItem);
    assert_eq!(definition.index(), 3);
    assert_eq!(definition.domain().item_domain().unwrap().len(), 6);
}

#[test]
fn test_numbers_become_text() {
    let tbl = convert("ints", "text");
    assert_eq!(tbl.cell("ints", 3), Some(&Value::text("309")));
    assert_eq!(tbl.column_definition("ints").unwrap().value_type(), ValueType::String);
}

#[test]
fn test_placeholder_defaults_when_omitted() {
    let tbl = run_table(
        "convertcolumndomain",
        vec![test_table().into(), "strings2".into(), "value".into()],
    );
    assert_eq!(tbl.cell("strings2", 0), Some(&Value::Number(100.0)));
    assert_eq!(tbl.cell("strings2", 5), Some(&Value::Undefined));
}

#[test]
fn test_other_columns_are_unchanged() {
    let original = test_table();
    let tbl = convert("strings2", "integer");

    assert_eq!(tbl.column_count(), original.column_count());
    assert_eq!(tbl.column("strings1"), original.column("strings1"));
    assert_eq!(original.cell("strings2", 1), Some(&Value::text("200")));
}

#[test]
fn test_missing_column() {
    let err = execute(
        "convertcolumndomain",
        vec![test_table().into(), "illegalcolumn".into(), "value".into(), "?".into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::ColumnNotFound(_)));
}

#[test]
fn test_empty_table() {
    let err = execute(
        "convertcolumndomain",
        vec![Table::new().into(), "illegalcolumn".into(), "value".into(), "?".into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::EmptyInput { .. }));
}

#[test]
fn test_unknown_target() {
    let err = execute(
        "convertcolumndomain",
        vec![test_table().into(), "strings2".into(), Argument::from("colour")],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::IllegalArgument { .. }));
}
