//! Generation settings layered from defaults, a TOML file and CLI flags.
//!
//! ```toml
//! [generate]
//! rows = 100
//! seed = 42
//! date_start = "2020-01-01"
//! date_end = "2021-07-09"
//! decimal = "declared"
//! output_dir = "output"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use seedgen_model::{DateRange, DecimalStrategy, GenerateOptions, parse_date};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub generate: GenerateSettings,
}

/// Partially specified generation settings. Unset fields fall through to
/// the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSettings {
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub decimal: Option<DecimalStrategy>,
    pub output_dir: Option<PathBuf>,
}

impl GenerateSettings {
    /// Layer `overrides` on top of `self`.
    #[must_use]
    pub fn merge(self, overrides: GenerateSettings) -> Self {
        Self {
            rows: overrides.rows.or(self.rows),
            seed: overrides.seed.or(self.seed),
            date_start: overrides.date_start.or(self.date_start),
            date_end: overrides.date_end.or(self.date_end),
            decimal: overrides.decimal.or(self.decimal),
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }

    /// Resolve into generation options, filling defaults for unset fields.
    pub fn to_options(&self) -> Result<GenerateOptions> {
        let defaults = GenerateOptions::default();
        let start = match &self.date_start {
            Some(value) => parse_date(value).context("parse date_start")?,
            None => defaults.date_range.start(),
        };
        let end = match &self.date_end {
            Some(value) => parse_date(value).context("parse date_end")?,
            None => defaults.date_range.end(),
        };
        let date_range = DateRange::new(start, end).context("build date range")?;
        let rows = self.rows.unwrap_or(defaults.rows);
        Ok(defaults
            .with_rows(rows)
            .with_seed(self.seed)
            .with_date_range(date_range)
            .with_decimal(self.decimal.unwrap_or_default()))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Read a TOML configuration file.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config: {}", path.display()))
}
