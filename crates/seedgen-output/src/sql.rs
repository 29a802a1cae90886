use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};

/// File name of the generated script for `database`.
pub fn default_sql_file_name(database: &str) -> String {
    format!("{database}_test_data_population.sql")
}

/// Write statements to `path`, one per line, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_sql_script<S: AsRef<str>>(path: &Path, statements: &[S]) -> Result<u64> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|source| OutputError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    let mut bytes = 0u64;
    for statement in statements {
        let statement = statement.as_ref();
        writeln!(writer, "{statement}").map_err(|source| OutputError::io(path, source))?;
        bytes += statement.len() as u64 + 1;
    }
    writer
        .flush()
        .map_err(|source| OutputError::io(path, source))?;
    info!(
        path = %path.display(),
        statements = statements.len(),
        bytes,
        "wrote SQL script"
    );
    Ok(bytes)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::io(parent, source))?;
    }
    Ok(())
}
