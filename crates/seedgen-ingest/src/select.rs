use seedgen_model::{DatabaseInfo, TableInfo, TablesInfo};

use crate::error::{IngestError, Result};

/// Restrict a metadata document to the requested tables.
///
/// With no `names`, every table in `schema` is kept (all tables when
/// `schema` is `None`). With `names`, tables are returned in the requested
/// order and each one must exist. Names compare case-insensitively, as
/// under SQL Server's default collation. Databases left without tables are
/// dropped.
pub fn select_tables(
    info: &TablesInfo,
    schema: Option<&str>,
    names: &[String],
) -> Result<TablesInfo> {
    let in_schema = |table: &TableInfo| {
        schema.is_none_or(|schema| table.table_schema.eq_ignore_ascii_case(schema))
    };

    let mut databases = Vec::new();
    let mut found = vec![false; names.len()];
    for database in &info.config {
        let tables: Vec<TableInfo> = if names.is_empty() {
            database
                .tables
                .iter()
                .filter(|table| in_schema(table))
                .cloned()
                .collect()
        } else {
            let mut selected = Vec::new();
            for (idx, name) in names.iter().enumerate() {
                if let Some(table) = database
                    .tables
                    .iter()
                    .find(|table| in_schema(table) && table.table_name.eq_ignore_ascii_case(name))
                {
                    found[idx] = true;
                    selected.push(table.clone());
                }
            }
            selected
        };
        if !tables.is_empty() {
            databases.push(DatabaseInfo {
                database: database.database.clone(),
                tables,
            });
        }
    }

    if let Some(idx) = found.iter().position(|hit| !hit) {
        return Err(IngestError::TableNotFound {
            schema: schema.unwrap_or("*").to_string(),
            table: names[idx].clone(),
        });
    }
    Ok(TablesInfo::new(databases))
}
