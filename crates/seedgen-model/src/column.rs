//! Column data types and the descriptor view consumed by value generation.
//!
//! Type names follow SQL Server's `INFORMATION_SCHEMA.COLUMNS.DATA_TYPE`
//! spelling. Parsing never fails: names outside the supported set are kept
//! verbatim in [`DataType::Unknown`] so they can be reported and skipped.
//! The metadata document keeps the raw text; [`DataType`] is the parsed view.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SeedgenError};

/// Declared data type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Char,
    Varchar,
    NChar,
    NVarchar,
    Decimal,
    Binary,
    SmallInt,
    Int,
    Date,
    SmallDateTime,
    DateTime,
    DateTime2,
    /// Any type without a generation rule, keeping the original spelling.
    Unknown(String),
}

impl DataType {
    /// Every supported type, in the order they are listed to users.
    pub const SUPPORTED: [DataType; 12] = [
        DataType::Char,
        DataType::Varchar,
        DataType::NChar,
        DataType::NVarchar,
        DataType::Decimal,
        DataType::Binary,
        DataType::SmallInt,
        DataType::Int,
        DataType::Date,
        DataType::SmallDateTime,
        DataType::DateTime,
        DataType::DateTime2,
    ];

    /// Returns the lowercase SQL Server type name.
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Char => "char",
            DataType::Varchar => "varchar",
            DataType::NChar => "nchar",
            DataType::NVarchar => "nvarchar",
            DataType::Decimal => "decimal",
            DataType::Binary => "binary",
            DataType::SmallInt => "smallint",
            DataType::Int => "int",
            DataType::Date => "date",
            DataType::SmallDateTime => "smalldatetime",
            DataType::DateTime => "datetime",
            DataType::DateTime2 => "datetime2",
            DataType::Unknown(name) => name.as_str(),
        }
    }

    /// Returns the generation family this type belongs to.
    pub fn family(&self) -> TypeFamily {
        match self {
            DataType::Char | DataType::Varchar | DataType::NChar | DataType::NVarchar => {
                TypeFamily::Character
            }
            DataType::Decimal => TypeFamily::Decimal,
            DataType::Binary => TypeFamily::Binary,
            DataType::SmallInt => TypeFamily::SmallInt,
            DataType::Int => TypeFamily::Int,
            DataType::Date | DataType::SmallDateTime | DataType::DateTime | DataType::DateTime2 => {
                TypeFamily::Date
            }
            DataType::Unknown(_) => TypeFamily::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.family() != TypeFamily::Unsupported
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = std::convert::Infallible;

    /// Parse a type name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "char" => DataType::Char,
            "varchar" => DataType::Varchar,
            "nchar" => DataType::NChar,
            "nvarchar" => DataType::NVarchar,
            "decimal" => DataType::Decimal,
            "binary" => DataType::Binary,
            "smallint" => DataType::SmallInt,
            "int" => DataType::Int,
            "date" => DataType::Date,
            "smalldatetime" => DataType::SmallDateTime,
            "datetime" => DataType::DateTime,
            "datetime2" => DataType::DateTime2,
            _ => DataType::Unknown(trimmed.to_string()),
        };
        Ok(parsed)
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(data_type) => data_type,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for DataType {
    fn from(value: &str) -> Self {
        DataType::from(value.to_string())
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        match value {
            DataType::Unknown(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// Group of data types sharing one generation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// char, varchar, nchar, nvarchar
    Character,
    Decimal,
    Binary,
    SmallInt,
    Int,
    /// date, smalldatetime, datetime, datetime2
    Date,
    Unsupported,
}

impl TypeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFamily::Character => "character",
            TypeFamily::Decimal => "decimal",
            TypeFamily::Binary => "binary",
            TypeFamily::SmallInt => "smallint",
            TypeFamily::Int => "int",
            TypeFamily::Date => "date",
            TypeFamily::Unsupported => "unsupported",
        }
    }

    /// Returns true when generation consumes `character_maximum_length`.
    pub fn requires_length(&self) -> bool {
        matches!(self, TypeFamily::Character | TypeFamily::Binary)
    }
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one column, as seen by the value generator.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor<'a> {
    pub name: &'a str,
    pub data_type: DataType,
    pub max_length: Option<i64>,
    pub nullable: bool,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
}

impl<'a> ColumnDescriptor<'a> {
    pub fn new(name: &'a str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            max_length: None,
            nullable: true,
            numeric_precision: None,
            numeric_scale: None,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, length: i64) -> Self {
        self.max_length = Some(length);
        self
    }

    #[must_use]
    pub fn with_numeric(mut self, precision: u32, scale: u32) -> Self {
        self.numeric_precision = Some(precision);
        self.numeric_scale = Some(scale);
        self
    }

    /// Returns the declared length for a length-dependent column.
    ///
    /// # Errors
    ///
    /// Returns [`SeedgenError::MissingLength`] when the length is absent or
    /// not positive (SQL Server reports `-1` for `(max)` columns).
    pub fn required_length(&self) -> Result<usize> {
        match self.max_length {
            Some(length) if length > 0 => {
                usize::try_from(length).map_err(|_| self.missing_length())
            }
            _ => Err(self.missing_length()),
        }
    }

    fn missing_length(&self) -> SeedgenError {
        SeedgenError::MissingLength {
            column: self.name.to_string(),
            data_type: self.data_type.to_string(),
            length: self.max_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("NVARCHAR".parse::<DataType>().unwrap(), DataType::NVarchar);
        assert_eq!(" DateTime2 ".parse::<DataType>().unwrap(), DataType::DateTime2);
    }

    #[test]
    fn unknown_keeps_spelling() {
        let data_type = DataType::from("uniqueIdentifier");
        assert_eq!(data_type, DataType::Unknown("uniqueIdentifier".to_string()));
        assert_eq!(data_type.family(), TypeFamily::Unsupported);
        assert!(!data_type.is_supported());
        assert_eq!(String::from(data_type), "uniqueIdentifier");
    }

    #[test]
    fn families_group_related_types() {
        assert_eq!(DataType::NChar.family(), TypeFamily::Character);
        assert_eq!(DataType::SmallDateTime.family(), TypeFamily::Date);
        assert!(DataType::Binary.family().requires_length());
        assert!(!DataType::Decimal.family().requires_length());
    }

    #[test]
    fn required_length_rejects_max_marker() {
        let column = ColumnDescriptor::new("notes", DataType::Varchar).with_max_length(-1);
        let err = column.required_length().unwrap_err();
        assert!(matches!(
            err,
            SeedgenError::MissingLength { length: Some(-1), .. }
        ));
    }
}
