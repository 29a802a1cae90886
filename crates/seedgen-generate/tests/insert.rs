//! Tests for INSERT assembly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use seedgen_generate::{construct_insert_string, generate_insert_statement, validate_table};
use seedgen_model::{
    ColumnInfo, DataType, GenerateOptions, GeneratedValue, SeedgenError, TableInfo,
};

#[test]
fn assembles_exact_statement() {
    let sql = construct_insert_string(
        "S",
        "T",
        vec![GeneratedValue::new("A", "1"), GeneratedValue::new("B", "'x'")],
    )
    .expect("assemble");
    insta::assert_snapshot!(sql, @"INSERT INTO [S].[T]([A], [B]) VALUES (1, 'x');");
}

#[test]
fn reserved_and_mixed_case_names_are_bracketed() {
    let sql = construct_insert_string(
        "Sales",
        "Order",
        vec![
            GeneratedValue::new("Select", "CAST('ab' AS BINARY(2))"),
            GeneratedValue::new("Due Date", "'2021-07-09'"),
        ],
    )
    .expect("assemble");
    assert_eq!(
        sql,
        "INSERT INTO [Sales].[Order]([Select], [Due Date]) VALUES (CAST('ab' AS BINARY(2)), '2021-07-09');"
    );
}

#[test]
fn empty_value_set_is_rejected() {
    let err = construct_insert_string("dbo", "t", Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        SeedgenError::EmptyRow { schema, table } if schema == "dbo" && table == "t"
    ));
}

#[test]
fn all_unsupported_columns_do_not_produce_a_statement() {
    let table = TableInfo {
        table_name: "blobs".to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![
            ColumnInfo::new("doc", 1, DataType::from("xml")),
            ColumnInfo::new("shape", 2, DataType::from("geometry")),
        ],
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = generate_insert_statement(&table, &GenerateOptions::default(), &mut rng).unwrap_err();
    assert!(matches!(err, SeedgenError::EmptyRow { .. }));
}

#[test]
fn generated_statement_uses_table_schema() {
    let table = TableInfo {
        table_name: "people".to_string(),
        table_schema: "hr".to_string(),
        columns: vec![
            ColumnInfo::new("age", 1, DataType::SmallInt),
            ColumnInfo::new("tag", 2, DataType::from("hierarchyid")),
        ],
    };
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let (statement, skipped) =
        generate_insert_statement(&table, &GenerateOptions::default(), &mut rng).expect("row");
    assert_eq!(statement.schema(), "hr");
    assert_eq!(statement.values().len(), 1);
    assert_eq!(skipped.len(), 1);
    assert!(statement.to_string().starts_with("INSERT INTO [hr].[people]([age]) VALUES ("));
}

#[test]
fn validation_reports_what_the_first_row_would() {
    let table = |columns: Vec<ColumnInfo>| TableInfo {
        table_name: "T".to_string(),
        table_schema: "S".to_string(),
        columns,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let options = GenerateOptions::default();

    let fine = table(vec![
        ColumnInfo::new("Doc", 1, DataType::from("xml")),
        ColumnInfo::new("N", 2, DataType::Int),
    ]);
    assert!(validate_table(&fine).is_ok());

    for broken in [
        table(vec![
            ColumnInfo::new("Id", 1, DataType::Int),
            ColumnInfo::new("Raw", 2, DataType::Binary),
        ]),
        table(vec![ColumnInfo::new("Doc", 1, DataType::from("xml"))]),
        table(vec![]),
    ] {
        let checked = validate_table(&broken).expect_err("invalid table").to_string();
        let generated = generate_insert_statement(&broken, &options, &mut rng)
            .expect_err("row fails")
            .to_string();
        assert_eq!(checked, generated);
    }
}
