//! Tests for seedgen-model types.

use seedgen_model::{
    ColumnInfo, DEFAULT_START_DATE, DataType, DatabaseInfo, DateRange, DecimalStrategy,
    GenerateOptions, Nullability, SeedgenError, TableInfo, TablesInfo,
};

const DOCUMENT: &str = r#"{
  "config": [
    {
      "database": "test_db",
      "tables": [
        {
          "tablename": "test_table1",
          "tableschema": "dbo",
          "columns": [
            {
              "columnname": "Name",
              "ordinal_position": 1,
              "is_nullable": "NO",
              "data_type": "nvarchar",
              "character_maximum_length": 20,
              "character_octet_length": 40,
              "numeric_precision": null,
              "numeric_precision_radix": null,
              "numeric_scale": null,
              "datetime_precision": null,
              "character_set_name": "UNICODE",
              "collation_name": "SQL_Latin1_General_CP1_CI_AS"
            },
            {
              "columnname": "Id",
              "ordinal_position": 2,
              "is_nullable": "YES",
              "data_type": "uniqueidentifier",
              "character_maximum_length": null,
              "character_octet_length": null,
              "numeric_precision": null,
              "numeric_precision_radix": null,
              "numeric_scale": null,
              "datetime_precision": null,
              "character_set_name": null,
              "collation_name": null
            }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn document_deserializes() {
    let info: TablesInfo = serde_json::from_str(DOCUMENT).expect("parse document");
    assert_eq!(info.primary_database(), Some("test_db"));
    assert_eq!(info.table_count(), 1);

    let table = info.tables().next().expect("one table");
    assert_eq!(table.qualified_name(), "dbo.test_table1");
    assert_eq!(table.columns[0].data_type(), DataType::NVarchar);
    assert_eq!(table.columns[0].nullability(), Some(Nullability::No));
    assert_eq!(
        table.columns[1].data_type(),
        DataType::Unknown("uniqueidentifier".to_string())
    );
}

#[test]
fn document_round_trips_unchanged() {
    let info: TablesInfo = serde_json::from_str(DOCUMENT).expect("parse document");
    let original: serde_json::Value = serde_json::from_str(DOCUMENT).expect("parse value");
    let exported = serde_json::to_value(&info).expect("serialize document");
    assert_eq!(exported, original);
}

#[test]
fn source_spelling_survives_round_trip() {
    let document = DOCUMENT
        .replace(r#""data_type": "nvarchar""#, r#""data_type": " NVARCHAR ""#)
        .replace(r#""is_nullable": "NO""#, r#""is_nullable": "no""#)
        .replace(r#""data_type": "uniqueidentifier""#, r#""data_type": "UniqueIdentifier""#);
    let info: TablesInfo = serde_json::from_str(&document).expect("parse document");
    let column = &info.config[0].tables[0].columns[0];
    assert_eq!(column.data_type(), DataType::NVarchar);
    assert_eq!(column.nullability(), Some(Nullability::No));
    assert!(!column.descriptor().nullable);

    let original: serde_json::Value = serde_json::from_str(&document).expect("parse value");
    let exported = serde_json::to_value(&info).expect("serialize document");
    assert_eq!(exported, original);
}

#[test]
fn unrecognized_nullability_reads_as_nullable() {
    let mut column = ColumnInfo::new("Flag", 1, DataType::Int);
    column.is_nullable = "maybe".to_string();
    assert_eq!(column.nullability(), None);
    assert!(column.descriptor().nullable);
}

#[test]
fn descriptor_borrows_generation_fields() {
    let column = ColumnInfo::new("Price", 3, DataType::Decimal)
        .with_numeric(5, 2)
        .with_nullability(Nullability::No);
    let descriptor = column.descriptor();
    assert_eq!(descriptor.name, "Price");
    assert_eq!(descriptor.data_type, DataType::Decimal);
    assert_eq!(column.data_type, "decimal");
    assert_eq!(column.is_nullable, "NO");
    assert_eq!(descriptor.numeric_precision, Some(5));
    assert_eq!(descriptor.numeric_scale, Some(2));
    assert!(!descriptor.nullable);
}

#[test]
fn tables_iterate_across_databases() {
    let table = |name: &str| TableInfo {
        table_name: name.to_string(),
        table_schema: "dbo".to_string(),
        columns: vec![],
    };
    let info = TablesInfo::new(vec![
        DatabaseInfo {
            database: "one".to_string(),
            tables: vec![table("a"), table("b")],
        },
        DatabaseInfo {
            database: "two".to_string(),
            tables: vec![table("c")],
        },
    ]);
    let names: Vec<&str> = info.tables().map(|t| t.table_name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn date_range_rejects_reversed_bounds() {
    let err = DateRange::parse("2021-07-10", "2021-07-09").unwrap_err();
    assert!(matches!(err, SeedgenError::InvalidDateRange { .. }));
}

#[test]
fn date_range_rejects_malformed_dates() {
    let err = DateRange::parse("09/07/2021", "2021-07-09").unwrap_err();
    assert!(matches!(err, SeedgenError::InvalidDate { value } if value == "09/07/2021"));
}

#[test]
fn default_options_generate_one_row() {
    let options = GenerateOptions::default();
    assert_eq!(options.rows, 1);
    assert_eq!(options.seed, None);
    assert_eq!(options.decimal, DecimalStrategy::Fixed);
    assert_eq!(options.date_range.start().to_string(), DEFAULT_START_DATE);
    assert!(options.date_range.end() >= options.date_range.start());
}

#[test]
fn decimal_strategy_parses() {
    assert_eq!(
        "Declared".parse::<DecimalStrategy>(),
        Ok(DecimalStrategy::Declared)
    );
    assert!("scaled".parse::<DecimalStrategy>().is_err());
}
