//! FILENAME: core/operations/tests/test_addcolumn.rs
//! Integration tests for addcolumn.

mod common;

use common::{run_table, test_table};
use engine::{Domain, Value, ValueType};
use operations::{execute, Argument, OperationError};

#[test]
fn test_add_numeric_column() {
    let tbl = test_table();

    let new_tbl = run_table(
        "addcolumn",
        vec![tbl.clone().into(), "newcol1".into(), Domain::numeric().into()],
    );

    assert_eq!(new_tbl.column_count(), 8);
    let definition = new_tbl.column_definition_at(7).unwrap();
    assert_eq!(definition.name(), "newcol1");
    assert_eq!(definition.value_type(), ValueType::Double);
    assert_eq!(new_tbl.record_count(), 6);
    assert!(new_tbl.column("newcol1").unwrap().iter().all(Value::is_undefined));

    // the input keeps its 7 columns
    assert_eq!(tbl.column_count(), 7);
}

#[test]
fn test_same_name_is_rejected() {
    let tbl = run_table(
        "addcolumn",
        vec![test_table().into(), "newcol1".into(), Domain::numeric().into()],
    );

    let err = execute(
        "addcolumn",
        vec![tbl.into(), "newcol1".into(), Domain::numeric().into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::DuplicateColumn(name) if name == "newcol1"));
}

#[test]
fn test_domain_by_system_name() {
    let tbl = run_table(
        "addcolumn",
        vec![test_table().into(), "label".into(), "text".into()],
    );
    assert_eq!(tbl.column_definition("label").unwrap().value_type(), ValueType::String);
}

#[test]
fn test_unknown_domain_name() {
    let err = execute(
        "addcolumn",
        vec![test_table().into(), "label".into(), "colour".into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::Engine(_)));
}

#[test]
fn test_blank_name_is_rejected() {
    let err = execute(
        "addcolumn",
        vec![test_table().into(), Argument::from(" "), Domain::numeric().into()],
    )
    .unwrap_err();
    assert!(matches!(err, OperationError::EmptyInput { .. }));
}
