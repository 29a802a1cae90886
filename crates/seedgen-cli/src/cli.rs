//! CLI argument definitions for seedgen.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "seedgen",
    version,
    about = "Generate random INSERT statements from SQL Server column metadata",
    long_about = "Generate synthetic test data for SQL Server tables.\n\n\
                  Reads table metadata (a table_info.json document or an\n\
                  INFORMATION_SCHEMA.COLUMNS CSV export) and writes a SQL script\n\
                  with randomized INSERT statements plus the metadata it used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate INSERT statements for the tables in a metadata file.
    Generate(GenerateArgs),

    /// List the supported column data types.
    Types,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the table metadata (JSON document or CSV export).
    #[arg(value_name = "METADATA")]
    pub metadata: PathBuf,

    /// Format of the metadata file.
    #[arg(long = "input-format", value_enum, default_value = "json")]
    pub input_format: InputFormatArg,

    /// Database name for a CSV export (names the output script).
    #[arg(long = "database", value_name = "NAME", default_value = "test_db")]
    pub database: String,

    /// Only generate for tables in this schema.
    #[arg(long = "schema", value_name = "SCHEMA")]
    pub schema: Option<String>,

    /// Only generate for these tables (repeatable).
    #[arg(long = "table", value_name = "TABLE")]
    pub tables: Vec<String>,

    /// Rows to generate per table (default: 1).
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Earliest date for date columns, YYYY-MM-DD (default: 1980-01-01).
    #[arg(long = "date-start", value_name = "DATE")]
    pub date_start: Option<String>,

    /// Latest date for date columns, YYYY-MM-DD (default: today).
    #[arg(long = "date-end", value_name = "DATE")]
    pub date_end: Option<String>,

    /// How decimal columns are filled.
    ///
    /// `fixed` draws 1.55..=3.89 with two decimals for every column;
    /// `declared` fits each column's precision and scale.
    #[arg(long = "decimal", value_enum)]
    pub decimal: Option<DecimalArg>,

    /// Output directory for generated files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with a [generate] section; flags override it.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DecimalArg {
    Fixed,
    Declared,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
