use std::fs;
use std::path::Path;

use tracing::info;

use seedgen_model::TablesInfo;

use crate::error::{OutputError, Result};
use crate::sql::ensure_parent;

/// File name of the exported metadata document.
pub const TABLE_INFO_FILE_NAME: &str = "table_info.json";

/// Serialize the metadata document to `path` unchanged.
pub fn write_tables_info_json(path: &Path, info: &TablesInfo) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string(info).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| OutputError::io(path, source))?;
    info!(
        path = %path.display(),
        tables = info.table_count(),
        "wrote metadata document"
    );
    Ok(())
}
