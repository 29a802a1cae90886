use std::fmt;

use crate::error::{Result, SeedgenError};

/// A column paired with its rendered SQL literal.
///
/// The literal is already valid inside a `VALUES` list and is emitted as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedValue {
    pub column: String,
    pub literal: String,
}

impl GeneratedValue {
    pub fn new(column: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            literal: literal.into(),
        }
    }
}

/// One `INSERT` statement with at least one value.
///
/// Columns and values are rendered positionally, in the order of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    schema: String,
    table: String,
    values: Vec<GeneratedValue>,
}

impl InsertStatement {
    /// # Errors
    ///
    /// Returns [`SeedgenError::EmptyRow`] when `values` is empty.
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        values: Vec<GeneratedValue>,
    ) -> Result<Self> {
        let schema = schema.into();
        let table = table.into();
        if values.is_empty() {
            return Err(SeedgenError::EmptyRow { schema, table });
        }
        Ok(Self {
            schema,
            table,
            values,
        })
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn values(&self) -> &[GeneratedValue] {
        &self.values
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {}.{}(",
            quote_identifier(&self.schema),
            quote_identifier(&self.table)
        )?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&quote_identifier(&value.column))?;
        }
        f.write_str(") VALUES (")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&value.literal)?;
        }
        f.write_str(");")
    }
}

/// Bracket-quote an identifier, doubling any closing bracket.
pub fn quote_identifier(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}
