//! Ingestion Invariant Tests
//!
//! - A call within arity always commits exactly one row
//! - A call beyond arity commits nothing and logs nothing
//! - Fail-fast returns the error but keeps the row
//! - Collect mode logs exactly one entry per failing call
//! - Rendering is stable between ingestions

use datarow::table::ParseErrors;
use datarow::{ErrorPolicy, Field, FieldError, FieldType, Table, TableError};

// =============================================================================
// Helper Functions
// =============================================================================

fn sales_table(policy: ErrorPolicy) -> Table {
    let mut table = Table::new(policy);
    table.add_column(FieldType::Date, "created_at");
    table.add_column(FieldType::Category, "product_category");
    table.add_column(FieldType::Number, "cost");
    table
}

fn failures(err: &TableError) -> &ParseErrors {
    match err {
        TableError::Row(row) => &row.errors,
        other => panic!("expected row error, got {other:?}"),
    }
}

const INPUTS: &[&[&str]] = &[
    &[],
    &["15-07-1990 10:22:04"],
    &["15-07-1990 10:22:04", "Hobs"],
    &["15-07-1990 10:22:04", "Hobs", "1.35"],
    &["bad date", "Hobs", "1.35"],
    &["15-07-1990 10:22:04", "", "not a number"],
    &["bad", "", "bad"],
];

// =============================================================================
// Row Commit Tests
// =============================================================================

/// Every call within arity adds exactly one row, in both modes.
#[test]
fn test_within_arity_always_commits_one_row() {
    for policy in [ErrorPolicy::Collect, ErrorPolicy::FailFast] {
        let mut table = sales_table(policy);
        for (i, values) in INPUTS.iter().copied().enumerate() {
            let _ = table.set(values);
            assert_eq!(table.len(), i + 1, "policy {policy:?}, input {values:?}");
        }
    }
}

/// Too many values never commit a row or log an error.
#[test]
fn test_beyond_arity_commits_nothing() {
    for policy in [ErrorPolicy::Collect, ErrorPolicy::FailFast] {
        let mut table = sales_table(policy);
        table.set(&["15-07-1990 10:22:04", "Hobs", "1.35"]).unwrap();

        let err = table
            .set(&["15-07-1990 10:22:04", "Hobs", "1.35", "extra"])
            .unwrap_err();
        assert_eq!(err.code(), "DATAROW_ARITY");
        assert_eq!(table.len(), 1);
        assert!(table.errors().is_empty());
    }
}

/// An empty schema rejects any non-empty row but accepts an empty one.
#[test]
fn test_empty_schema() {
    let mut table = Table::new(ErrorPolicy::Collect);
    assert!(table.set(&["x"]).is_err());

    let empty: [&str; 0] = [];
    table.set(&empty).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.to_string(), "0, \n");
}

// =============================================================================
// Error Policy Tests
// =============================================================================

/// Fail-fast error names the row that was committed.
#[test]
fn test_fail_fast_error_matches_committed_row() {
    let mut table = sales_table(ErrorPolicy::FailFast);
    table.set(&["15-07-1990 10:22:04", "Hobs", "1.35"]).unwrap();
    table.set(&["15-07-1990 10:22:04", "Hobs", "2.67"]).unwrap();

    let err = table
        .set(&["23-12-2024 23:59:04", "Horno", "123341;35"])
        .unwrap_err();
    let row = err.row().unwrap();
    assert_eq!(row, 2);
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.row(row).unwrap()[1],
        Field::Category("Horno".to_string())
    );
    assert!(table.errors().is_empty());
}

/// Collect mode returns Ok and logs one entry with the right index.
#[test]
fn test_collect_mode_logs_one_entry_per_call() {
    let mut table = sales_table(ErrorPolicy::Collect);
    table.set(&["15-07-1990 10:22:04", "Hobs", "1.35"]).unwrap();
    assert!(table.set(&["bad", "", "bad"]).is_ok());
    assert!(table.set(&["15-07-1990 10:22:04", "", "bad"]).is_ok());

    assert_eq!(table.errors().len(), 2);
    assert_eq!(table.errors()[0].row, 1);
    assert_eq!(table.errors()[0].errors.len(), 2);
    assert_eq!(table.errors()[1].row, 2);
    assert_eq!(table.errors()[1].errors.len(), 1);
}

/// Failures of one call are combined in column order, none dropped.
#[test]
fn test_composite_error_keeps_all_failures() {
    let mut table = sales_table(ErrorPolicy::FailFast);
    let err = table.set(&["23-12-2024X23:59:04", "", "123341;35"]).unwrap_err();
    let parts: Vec<_> = failures(&err).iter().collect();

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].column, 0);
    assert_eq!(parts[0].name, "created_at");
    assert!(matches!(parts[0].source, FieldError::InvalidDate { .. }));
    assert_eq!(parts[1].column, 2);
    assert!(matches!(
        parts[1].source,
        FieldError::InvalidNumber { ref input, .. } if input == "123341;35"
    ));
}

// =============================================================================
// Rendering Tests
// =============================================================================

/// Rendering twice without ingestion gives the same text.
#[test]
fn test_render_is_idempotent() {
    let mut table = sales_table(ErrorPolicy::Collect);
    for values in INPUTS.iter().copied() {
        let _ = table.set(values);
    }
    assert_eq!(table.to_string(), table.to_string());
    assert_eq!(table.render_errors(), table.render_errors());
    assert_eq!(table.to_string().lines().count(), INPUTS.len());
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_sales_scenario() {
    let mut table = sales_table(ErrorPolicy::Collect);

    table.set(&["15-07-1990 10:22:04", "Hobs", "1.35"]).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.errors().len(), 0);

    table.set(&["23-12-2024X23:59:04", "", "123341.35"]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.errors().len(), 1);
    assert_eq!(table.rows()[1][0], Field::new(FieldType::Date));

    table.set(&["15-07-1990 10:22:04", "Hobs", "2.67"]).unwrap();
    table.set(&["23-12-2024 23:59:04", "Horno", "123341;35"]).unwrap();
    table.set(&["15-07-2023 10:22:04", "Hobs", "8.88"]).unwrap();

    assert_eq!(
        table.to_string(),
        "0, 1990-07-15 10:22:04, Hobs, 1.35\n\
         1, 1970-01-01 00:00:00, , 123341.35\n\
         2, 1990-07-15 10:22:04, Hobs, 2.67\n\
         3, 2024-12-23 23:59:04, Horno, 0\n\
         4, 2023-07-15 10:22:04, Hobs, 8.88\n"
    );

    let errors = table.render_errors();
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[1]-column 0 (created_at): cannot parse"));
    assert!(lines[1].starts_with("[3]-column 2 (cost): invalid number \"123341;35\""));
}
