//! Loader for CSV exports of `INFORMATION_SCHEMA.COLUMNS`.
//!
//! Header names are matched case-insensitively. `TABLE_SCHEMA`,
//! `TABLE_NAME`, `COLUMN_NAME`, `ORDINAL_POSITION` and `DATA_TYPE` are
//! required; the remaining columns are optional. Empty cells and the text
//! `NULL` read as missing values.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use seedgen_model::{ColumnInfo, DatabaseInfo, Nullability, TableInfo, TablesInfo};

use crate::error::{IngestError, Result};

const REQUIRED_HEADERS: [&str; 5] = [
    "TABLE_SCHEMA",
    "TABLE_NAME",
    "COLUMN_NAME",
    "ORDINAL_POSITION",
    "DATA_TYPE",
];

/// Load an `INFORMATION_SCHEMA.COLUMNS` export as a one-database document.
///
/// Tables keep the order in which they first appear; columns are sorted by
/// `ORDINAL_POSITION`.
pub fn load_information_schema_csv(path: &Path, database: &str) -> Result<TablesInfo> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .clone();
    let index = HeaderIndex::new(&headers);
    for required in REQUIRED_HEADERS {
        if index.position(required).is_none() {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut tables: Vec<TableInfo> = Vec::new();
    let mut positions: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let row = Row {
            path,
            record: &record,
            index: &index,
        };
        let schema = row.required("TABLE_SCHEMA")?;
        let table = row.required("TABLE_NAME")?;
        let column = row.column_info()?;
        let slot = *positions
            .entry((schema.clone(), table.clone()))
            .or_insert_with(|| {
                tables.push(TableInfo {
                    table_name: table,
                    table_schema: schema,
                    columns: Vec::new(),
                });
                tables.len() - 1
            });
        tables[slot].columns.push(column);
    }
    for table in &mut tables {
        table.columns.sort_by_key(|column| column.ordinal_position);
    }
    debug!(
        path = %path.display(),
        tables = tables.len(),
        "loaded INFORMATION_SCHEMA export"
    );
    Ok(TablesInfo::new(vec![DatabaseInfo {
        database: database.to_string(),
        tables,
    }]))
}

struct HeaderIndex {
    positions: BTreeMap<String, usize>,
}

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let key = name.trim_matches('\u{feff}').trim().to_ascii_uppercase();
                (key, idx)
            })
            .collect();
        Self { positions }
    }

    fn position(&self, header: &str) -> Option<usize> {
        self.positions.get(header).copied()
    }
}

struct Row<'a> {
    path: &'a Path,
    record: &'a StringRecord,
    index: &'a HeaderIndex,
}

impl Row<'_> {
    fn optional(&self, header: &str) -> Option<String> {
        let value = self.record.get(self.index.position(header)?)?.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("NULL") {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn required(&self, header: &str) -> Result<String> {
        self.optional(header)
            .ok_or_else(|| self.invalid(header, String::new()))
    }

    fn number<T: FromStr>(&self, header: &str) -> Result<Option<T>> {
        match self.optional(header) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| self.invalid(header, value)),
            None => Ok(None),
        }
    }

    fn invalid(&self, header: &str, value: String) -> IngestError {
        IngestError::InvalidValue {
            path: self.path.to_path_buf(),
            line: self.record.position().map_or(0, csv::Position::line),
            column: header.to_string(),
            value,
        }
    }

    fn column_info(&self) -> Result<ColumnInfo> {
        let ordinal_position = self
            .number("ORDINAL_POSITION")?
            .ok_or_else(|| self.invalid("ORDINAL_POSITION", String::new()))?;
        let is_nullable = match self.optional("IS_NULLABLE") {
            Some(value) if Nullability::parse(&value).is_some() => value,
            Some(value) => return Err(self.invalid("IS_NULLABLE", value)),
            None => Nullability::default().as_str().to_string(),
        };
        Ok(ColumnInfo {
            column_name: self.required("COLUMN_NAME")?,
            ordinal_position,
            is_nullable,
            data_type: self.required("DATA_TYPE")?,
            character_maximum_length: self.number("CHARACTER_MAXIMUM_LENGTH")?,
            character_octet_length: self.number("CHARACTER_OCTET_LENGTH")?,
            numeric_precision: self.number("NUMERIC_PRECISION")?,
            numeric_precision_radix: self.number("NUMERIC_PRECISION_RADIX")?,
            numeric_scale: self.number("NUMERIC_SCALE")?,
            datetime_precision: self.number("DATETIME_PRECISION")?,
            character_set_name: self.optional("CHARACTER_SET_NAME"),
            collation_name: self.optional("COLLATION_NAME"),
        })
    }
}
