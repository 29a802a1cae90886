//! INSERT statement assembly.

use rand::Rng;

use seedgen_model::{
    GenerateOptions, GeneratedValue, InsertStatement, Result, SeedgenError, TableInfo,
};

use crate::row::{SkippedColumn, generate_row};

/// Render `INSERT INTO [schema].[table](cols) VALUES (vals);`.
///
/// Literals are emitted as given; column names are bracket-quoted.
///
/// # Errors
///
/// Returns `SeedgenError::EmptyRow` when `values` is empty.
pub fn construct_insert_string(
    schema: &str,
    table: &str,
    values: Vec<GeneratedValue>,
) -> Result<String> {
    Ok(InsertStatement::new(schema, table, values)?.to_string())
}

/// Generate one row for `table` and assemble it into a statement.
///
/// Returns the statement together with the columns that were skipped.
pub fn generate_insert_statement<R: Rng + ?Sized>(
    table: &TableInfo,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<(InsertStatement, Vec<SkippedColumn>)> {
    let row = generate_row(&table.columns, options, rng)?;
    let statement = InsertStatement::new(&table.table_schema, &table.table_name, row.values)?;
    Ok((statement, row.skipped))
}

/// Check that `table` can produce a statement at all.
///
/// Both failures depend only on the metadata, so a table that fails here
/// fails the same way on every row. The error is the one the first row
/// would report: the first column violating its length contract, otherwise
/// [`SeedgenError::EmptyRow`] when no column has a generation rule.
pub fn validate_table(table: &TableInfo) -> Result<()> {
    let mut supported = false;
    for column in &table.columns {
        let descriptor = column.descriptor();
        let family = descriptor.data_type.family();
        if family.requires_length() {
            descriptor.required_length()?;
        }
        supported |= descriptor.data_type.is_supported();
    }
    if supported {
        Ok(())
    } else {
        Err(SeedgenError::EmptyRow {
            schema: table.table_schema.clone(),
            table: table.table_name.clone(),
        })
    }
}
