//! Random SQL literal generation and INSERT statement assembly.
//!
//! The random source is always passed in by the caller, so a seeded
//! [`rand_chacha::ChaCha8Rng`] (see [`seeded_rng`]) reproduces a run exactly
//! and concurrent callers can each own an independent generator.

pub mod batch;
pub mod datetime;
pub mod insert;
pub mod literal;
pub mod rng;
pub mod row;
pub mod values;

pub use batch::{BatchOutput, TableReport, generate_insert_queries};
pub use datetime::{date_at_proportion, random_date};
pub use insert::{construct_insert_string, generate_insert_statement, validate_table};
pub use literal::{LETTERS, quote_string, random_letters};
pub use rng::seeded_rng;
pub use row::{RowOutcome, SkippedColumn, generate_row, skipped_columns};
pub use values::{
    INT_RANGE, SMALLINT_RANGE, generate_literal, random_binary, random_date_literal,
    random_decimal, random_declared_decimal, random_int, random_smallint, random_string,
};
