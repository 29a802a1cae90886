//! Configuration options for test data generation.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SeedgenError};

/// Calendar format used for date bounds and date literals.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest date generated by default.
pub const DEFAULT_START_DATE: &str = "1980-01-01";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| SeedgenError::InvalidDate {
        value: value.to_string(),
    })
}

/// Inclusive range that date-family values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`SeedgenError::InvalidDateRange`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SeedgenError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// A range containing exactly one day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Default for DateRange {
    /// 1980-01-01 through today (local time).
    fn default() -> Self {
        let start = parse_date(DEFAULT_START_DATE).unwrap_or_default();
        let today = Local::now().date_naive();
        Self {
            start,
            end: today.max(start),
        }
    }
}

/// How `decimal` columns are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalStrategy {
    /// Uniform value in 1.55..=3.89 with two fractional digits, regardless
    /// of the declared precision and scale.
    #[default]
    Fixed,
    /// Fit the value to the column's declared precision and scale, falling
    /// back to `Fixed` when no precision is declared.
    Declared,
}

impl DecimalStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecimalStrategy::Fixed => "fixed",
            DecimalStrategy::Declared => "declared",
        }
    }
}

impl fmt::Display for DecimalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecimalStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(DecimalStrategy::Fixed),
            "declared" => Ok(DecimalStrategy::Declared),
            _ => Err(format!("Unknown decimal strategy: {}", s)),
        }
    }
}

/// Options controlling a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Rows generated per table.
    pub rows: usize,
    /// Seed for the random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Range for date-family columns.
    pub date_range: DateRange,
    pub decimal: DecimalStrategy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            seed: None,
            date_range: DateRange::default(),
            decimal: DecimalStrategy::default(),
        }
    }
}

impl GenerateOptions {
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    #[must_use]
    pub fn with_decimal(mut self, strategy: DecimalStrategy) -> Self {
        self.decimal = strategy;
        self
    }
}
