use rand::Rng;
use tracing::debug;

use seedgen_model::{ColumnInfo, GenerateOptions, GeneratedValue, Result};

use crate::values::generate_literal;

/// A column left out of a row because its type has no generation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedColumn {
    pub column: String,
    pub data_type: String,
}

/// Values generated for one row, in column order, plus the columns skipped.
#[derive(Debug, Clone, Default)]
pub struct RowOutcome {
    pub values: Vec<GeneratedValue>,
    pub skipped: Vec<SkippedColumn>,
}

/// Columns of `columns` whose type has no generation rule, in column order.
pub fn skipped_columns(columns: &[ColumnInfo]) -> Vec<SkippedColumn> {
    columns
        .iter()
        .map(ColumnInfo::descriptor)
        .filter(|descriptor| !descriptor.data_type.is_supported())
        .map(|descriptor| SkippedColumn {
            column: descriptor.name.to_string(),
            data_type: descriptor.data_type.to_string(),
        })
        .collect()
}

/// Generate one value per supported column, preserving column order.
///
/// # Errors
///
/// Fails on the first column that violates its length contract.
pub fn generate_row<R: Rng + ?Sized>(
    columns: &[ColumnInfo],
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<RowOutcome> {
    let mut outcome = RowOutcome {
        values: Vec::with_capacity(columns.len()),
        skipped: Vec::new(),
    };
    for column in columns {
        let descriptor = column.descriptor();
        match generate_literal(&descriptor, options, rng)? {
            Some(literal) => outcome
                .values
                .push(GeneratedValue::new(descriptor.name, literal)),
            None => {
                debug!(
                    column = %descriptor.name,
                    data_type = %descriptor.data_type,
                    "unknown format, column skipped"
                );
                outcome.skipped.push(SkippedColumn {
                    column: descriptor.name.to_string(),
                    data_type: descriptor.data_type.to_string(),
                });
            }
        }
    }
    Ok(outcome)
}
