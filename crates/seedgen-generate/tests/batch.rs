//! Tests for batch generation across tables.

use seedgen_generate::{generate_insert_queries, seeded_rng};
use seedgen_model::{
    ColumnInfo, DataType, DatabaseInfo, DateRange, GenerateOptions, TableInfo, TablesInfo,
};

fn mixed_table() -> TableInfo {
    TableInfo {
        table_name: "test_table1".to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![
            ColumnInfo::new("Name", 1, DataType::NVarchar).with_max_length(10),
            ColumnInfo::new("Price", 2, DataType::Decimal).with_numeric(5, 2),
            ColumnInfo::new("Hash", 3, DataType::Binary).with_max_length(4),
            ColumnInfo::new("Qty", 4, DataType::SmallInt),
            ColumnInfo::new("Total", 5, DataType::Int),
            ColumnInfo::new("Created", 6, DataType::DateTime),
        ],
    }
}

fn document(tables: Vec<TableInfo>) -> TablesInfo {
    TablesInfo::new(vec![DatabaseInfo {
        database: "test_db".to_string(),
        tables,
    }])
}

fn options(rows: usize) -> GenerateOptions {
    GenerateOptions::default()
        .with_rows(rows)
        .with_seed(Some(2021))
        .with_date_range(DateRange::parse("2021-07-09", "2021-07-09").expect("range"))
}

#[test]
fn n_rows_reference_all_columns_in_fixed_order() {
    let info = document(vec![mixed_table()]);
    let options = options(25);
    let mut rng = seeded_rng(options.seed);
    let output = generate_insert_queries(&info, &options, &mut rng);

    assert_eq!(output.statements.len(), 25);
    let prefix = "INSERT INTO [dbo].[test_table1]([Name], [Price], [Hash], [Qty], [Total], [Created]) VALUES (";
    for statement in &output.statements {
        assert!(statement.starts_with(prefix), "{statement}");
        assert!(statement.ends_with("'2021-07-09');"), "{statement}");
    }
    assert!(!output.has_errors());
    assert_eq!(output.tables[0].rows_generated, 25);
    assert_eq!(output.tables[0].columns, 6);
}

#[test]
fn statements_are_ordered_table_then_row() {
    let mut second = mixed_table();
    second.table_name = "test_table2".to_string();
    let info = document(vec![mixed_table(), second]);
    let options = options(3);
    let mut rng = seeded_rng(options.seed);
    let output = generate_insert_queries(&info, &options, &mut rng);

    let tables: Vec<bool> = output
        .statements
        .iter()
        .map(|s| s.contains("[test_table1]"))
        .collect();
    assert_eq!(tables, [true, true, true, false, false, false]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let info = document(vec![mixed_table()]);
    let options = options(5);
    let first = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));
    let second = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));
    assert_eq!(first.statements, second.statements);
}

#[test]
fn unknown_columns_are_reported_once_and_excluded() {
    let mut table = mixed_table();
    table
        .columns
        .insert(1, ColumnInfo::new("RowGuid", 2, DataType::from("uniqueidentifier")));
    let info = document(vec![table]);
    let options = options(4);
    let output = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));

    assert_eq!(output.statements.len(), 4);
    assert!(output.statements.iter().all(|s| !s.contains("[RowGuid]")));
    let report = &output.tables[0];
    assert_eq!(report.skipped_columns.len(), 1);
    assert_eq!(report.skipped_columns[0].data_type, "uniqueidentifier");
    assert_eq!(output.skipped_column_count(), 1);
    assert!(!report.has_errors());
}

#[test]
fn failing_rows_do_not_abort_the_batch() {
    let broken = TableInfo {
        table_name: "broken".to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![ColumnInfo::new("Code", 1, DataType::Char)],
    };
    let unsupported = TableInfo {
        table_name: "spatial".to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![ColumnInfo::new("Shape", 1, DataType::from("geography"))],
    };
    let info = document(vec![broken, unsupported, mixed_table()]);
    let options = options(2);
    let output = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));

    assert!(output.has_errors());
    assert_eq!(output.tables.len(), 3);
    assert_eq!(output.tables[0].rows_generated, 0);
    assert_eq!(output.tables[0].rows_failed, 2);
    assert_eq!(output.tables[0].errors.len(), 1);
    assert!(output.tables[0].errors[0].contains("Code"));
    assert_eq!(output.tables[1].rows_generated, 0);
    assert_eq!(output.tables[1].rows_failed, 2);
    assert!(output.tables[1].errors[0].contains("no generated values"));
    assert_eq!(output.tables[2].rows_generated, 2);
    assert_eq!(output.statements.len(), 2);
}

#[test]
fn zero_rows_generate_nothing() {
    let info = document(vec![mixed_table()]);
    let options = options(0);
    let output = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));
    assert!(output.statements.is_empty());
    assert_eq!(output.tables[0].rows_requested, 0);
}

#[test]
fn huge_row_counts_on_failing_tables_are_counted_not_attempted() {
    let xml_table = |name: &str| TableInfo {
        table_name: name.to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![ColumnInfo::new("Payload", 1, DataType::from("xml"))],
    };
    let unsized_char = TableInfo {
        table_name: "codes".to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![
            ColumnInfo::new("Id", 1, DataType::Int),
            ColumnInfo::new("Code", 2, DataType::Char).with_max_length(-1),
        ],
    };
    let rows = usize::MAX / 2 + 1;
    let info = document(vec![xml_table("docs"), xml_table("feeds"), unsized_char]);
    let options = options(rows);
    let output = generate_insert_queries(&info, &options, &mut seeded_rng(options.seed));

    assert!(output.statements.is_empty());
    assert_eq!(output.tables.len(), 3);
    for report in &output.tables {
        assert_eq!(report.rows_requested, rows);
        assert_eq!(report.rows_failed, rows);
        assert_eq!(report.rows_generated, 0);
        assert_eq!(report.errors.len(), 1);
    }
    assert!(output.tables[0].errors[0].contains("no generated values"));
    assert_eq!(output.tables[0].skipped_columns[0].column, "Payload");
    assert!(output.tables[2].errors[0].contains("Code"));
}
