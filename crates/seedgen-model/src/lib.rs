pub mod column;
pub mod error;
pub mod metadata;
pub mod options;
pub mod statement;

pub use column::{ColumnDescriptor, DataType, TypeFamily};
pub use error::{Result, SeedgenError};
pub use metadata::{ColumnInfo, DatabaseInfo, Nullability, TableInfo, TablesInfo};
pub use options::{
    DATE_FORMAT, DEFAULT_START_DATE, DateRange, DecimalStrategy, GenerateOptions, parse_date,
};
pub use statement::{GeneratedValue, InsertStatement, quote_identifier};
