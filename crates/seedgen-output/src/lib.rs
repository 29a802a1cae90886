//! Export of generated statements and table metadata.

pub mod error;
pub mod json;
pub mod sql;

pub use error::{OutputError, Result};
pub use json::{TABLE_INFO_FILE_NAME, write_tables_info_json};
pub use sql::{default_sql_file_name, write_sql_script};
