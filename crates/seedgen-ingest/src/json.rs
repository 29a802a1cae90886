use std::fs;
use std::path::Path;

use tracing::debug;

use seedgen_model::TablesInfo;

use crate::error::{IngestError, Result};

/// Load a `table_info.json` metadata document.
pub fn load_tables_info(path: &Path) -> Result<TablesInfo> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let info: TablesInfo = serde_json::from_str(&text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        databases = info.config.len(),
        tables = info.table_count(),
        "loaded metadata document"
    );
    Ok(info)
}
