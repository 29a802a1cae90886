//! Introspected table metadata.
//!
//! The serde layout mirrors the `table_info.json` document the tool reads and
//! writes, so a document loaded and exported again is unchanged.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDescriptor, DataType};

/// Root of the metadata document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TablesInfo {
    pub config: Vec<DatabaseInfo>,
}

impl TablesInfo {
    pub fn new(databases: Vec<DatabaseInfo>) -> Self {
        Self { config: databases }
    }

    /// Iterate every table of every database in document order.
    pub fn tables(&self) -> impl Iterator<Item = &TableInfo> {
        self.config.iter().flat_map(|database| database.tables.iter())
    }

    pub fn table_count(&self) -> usize {
        self.config.iter().map(|database| database.tables.len()).sum()
    }

    /// Name of the first database, used to name output files.
    pub fn primary_database(&self) -> Option<&str> {
        self.config.first().map(|database| database.database.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub database: String,
    pub tables: Vec<TableInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    #[serde(rename = "tablename")]
    pub table_name: String,
    #[serde(rename = "tableschema")]
    pub table_schema: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableInfo {
    /// Qualified `schema.table` name for logs and reports.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table_schema, self.table_name)
    }
}

/// Parsed `IS_NULLABLE` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullability {
    #[default]
    Yes,
    No,
}

impl Nullability {
    pub fn as_str(self) -> &'static str {
        match self {
            Nullability::Yes => "YES",
            Nullability::No => "NO",
        }
    }

    pub fn is_nullable(self) -> bool {
        matches!(self, Nullability::Yes)
    }

    /// Parse `YES`/`NO` (case-insensitive); anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "YES" => Some(Nullability::Yes),
            "NO" => Some(Nullability::No),
            _ => None,
        }
    }
}

/// One row of `INFORMATION_SCHEMA.COLUMNS`.
///
/// Only `data_type` and `character_maximum_length` drive generation (plus
/// precision and scale under the declared decimal strategy). The other
/// fields are carried through to the exported document.
///
/// `data_type` and `is_nullable` hold the text as read, so an exported
/// document keeps the source spelling; [`ColumnInfo::data_type`] and
/// [`ColumnInfo::nullability`] give the parsed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    #[serde(rename = "columnname")]
    pub column_name: String,
    pub ordinal_position: u32,
    pub is_nullable: String,
    pub data_type: String,
    pub character_maximum_length: Option<i64>,
    pub character_octet_length: Option<i64>,
    pub numeric_precision: Option<u32>,
    pub numeric_precision_radix: Option<u32>,
    pub numeric_scale: Option<u32>,
    pub datetime_precision: Option<u32>,
    pub character_set_name: Option<String>,
    pub collation_name: Option<String>,
}

impl ColumnInfo {
    /// Build a column with only a name, position and type set.
    pub fn new(column_name: impl Into<String>, ordinal_position: u32, data_type: DataType) -> Self {
        Self {
            column_name: column_name.into(),
            ordinal_position,
            is_nullable: Nullability::default().as_str().to_string(),
            data_type: String::from(data_type),
            character_maximum_length: None,
            character_octet_length: None,
            numeric_precision: None,
            numeric_precision_radix: None,
            numeric_scale: None,
            datetime_precision: None,
            character_set_name: None,
            collation_name: None,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, length: i64) -> Self {
        self.character_maximum_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_numeric(mut self, precision: u32, scale: u32) -> Self {
        self.numeric_precision = Some(precision);
        self.numeric_precision_radix = Some(10);
        self.numeric_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_nullability(mut self, nullability: Nullability) -> Self {
        self.is_nullable = nullability.as_str().to_string();
        self
    }

    /// Parsed data type; unrecognized names become [`DataType::Unknown`].
    pub fn data_type(&self) -> DataType {
        DataType::from(self.data_type.as_str())
    }

    /// Parsed `is_nullable`, or `None` when it is neither `YES` nor `NO`.
    pub fn nullability(&self) -> Option<Nullability> {
        Nullability::parse(&self.is_nullable)
    }

    pub fn descriptor(&self) -> ColumnDescriptor<'_> {
        ColumnDescriptor {
            name: &self.column_name,
            data_type: self.data_type(),
            max_length: self.character_maximum_length,
            nullable: self.nullability().is_none_or(Nullability::is_nullable),
            numeric_precision: self.numeric_precision,
            numeric_scale: self.numeric_scale,
        }
    }
}
