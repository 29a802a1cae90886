use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedgenError {
    /// A length-dependent column arrived without a usable maximum length.
    #[error(
        "column {column} ({data_type}) requires a positive character_maximum_length, found {length:?}"
    )]
    MissingLength {
        column: String,
        data_type: String,
        length: Option<i64>,
    },

    /// Every column of a row was skipped, so there is nothing to insert.
    #[error("row for [{schema}].[{table}] has no generated values")]
    EmptyRow { schema: String, table: String },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, SeedgenError>;
