//! Metadata ingestion for seedgen.
//!
//! Reads the table metadata document produced by schema introspection, or a
//! raw CSV export of `INFORMATION_SCHEMA.COLUMNS`, into [`TablesInfo`].
//!
//! [`TablesInfo`]: seedgen_model::TablesInfo

pub mod error;
pub mod information_schema;
pub mod json;
pub mod select;

pub use error::{IngestError, Result};
pub use information_schema::load_information_schema_csv;
pub use json::load_tables_info;
pub use select::select_tables;
