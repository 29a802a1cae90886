//! Batch generation across every table of a metadata document.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, error, info, info_span, warn};

use seedgen_model::{GenerateOptions, TableInfo, TablesInfo};

use crate::insert::{generate_insert_statement, validate_table};
use crate::row::{SkippedColumn, skipped_columns};

/// Outcome of generating rows for one table.
#[derive(Debug, Clone)]
pub struct TableReport {
    pub database: String,
    pub schema: String,
    pub table: String,
    pub rows_requested: usize,
    pub rows_generated: usize,
    /// Rows whose statement could not be produced.
    pub rows_failed: usize,
    pub columns: usize,
    /// Columns left out of every row, in column order.
    pub skipped_columns: Vec<SkippedColumn>,
    /// Distinct row failure messages, in first-seen order.
    pub errors: Vec<String>,
}

impl TableReport {
    fn new(database: &str, table: &TableInfo, rows_requested: usize) -> Self {
        Self {
            database: database.to_string(),
            schema: table.table_schema.clone(),
            table: table.table_name.clone(),
            rows_requested,
            rows_generated: 0,
            rows_failed: 0,
            columns: table.columns.len(),
            skipped_columns: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Statements in table-then-row order, with one report per table.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub statements: Vec<String>,
    pub tables: Vec<TableReport>,
}

impl BatchOutput {
    pub fn has_errors(&self) -> bool {
        self.tables.iter().any(TableReport::has_errors)
    }

    pub fn skipped_column_count(&self) -> usize {
        self.tables.iter().map(|t| t.skipped_columns.len()).sum()
    }
}

/// Generate `options.rows` INSERT statements for every table in `info`.
///
/// Failures are row-local: a length contract violation or a row with no
/// supported columns drops that row's statement, is recorded on the table's
/// report, and generation continues with the next row and table. Tables
/// whose metadata rules out every row are detected up front and all their
/// requested rows are counted as failed without being attempted.
pub fn generate_insert_queries<R: Rng + ?Sized>(
    info: &TablesInfo,
    options: &GenerateOptions,
    rng: &mut R,
) -> BatchOutput {
    let mut output = BatchOutput {
        statements: Vec::new(),
        tables: Vec::with_capacity(info.table_count()),
    };
    for database in &info.config {
        for table in &database.tables {
            let span = info_span!(
                "table",
                database = %database.database,
                schema = %table.table_schema,
                table = %table.table_name
            );
            let report = span.in_scope(|| {
                generate_table(
                    &database.database,
                    table,
                    options,
                    rng,
                    &mut output.statements,
                )
            });
            output.tables.push(report);
        }
    }
    output
}

fn generate_table<R: Rng + ?Sized>(
    database: &str,
    table: &TableInfo,
    options: &GenerateOptions,
    rng: &mut R,
    statements: &mut Vec<String>,
) -> TableReport {
    let start = Instant::now();
    let mut report = TableReport::new(database, table, options.rows);
    report.skipped_columns = skipped_columns(&table.columns);
    for column in &report.skipped_columns {
        warn!(
            column = %column.column,
            data_type = %column.data_type,
            "unknown format, column excluded from generated rows"
        );
    }
    if options.rows > 0
        && let Err(err) = validate_table(table)
    {
        error!(rows = options.rows, error = %err, "table cannot produce rows");
        report.rows_failed = options.rows;
        report.errors.push(err.to_string());
    } else {
        generate_rows(table, options, rng, statements, &mut report);
    }
    info!(
        rows_requested = report.rows_requested,
        rows_generated = report.rows_generated,
        rows_failed = report.rows_failed,
        skipped_columns = report.skipped_columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "table complete"
    );
    report
}

fn generate_rows<R: Rng + ?Sized>(
    table: &TableInfo,
    options: &GenerateOptions,
    rng: &mut R,
    statements: &mut Vec<String>,
    report: &mut TableReport,
) {
    for row_index in 0..options.rows {
        match generate_insert_statement(table, options, rng) {
            Ok((statement, _)) => {
                statements.push(statement.to_string());
                report.rows_generated += 1;
            }
            Err(err) => {
                report.rows_failed += 1;
                let message = err.to_string();
                if report.errors.contains(&message) {
                    debug!(row = row_index, error = %message, "row generation failed");
                } else {
                    error!(row = row_index, error = %message, "row generation failed");
                    report.errors.push(message);
                }
            }
        }
    }
}
