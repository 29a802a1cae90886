//! Load, generate and export stages of a generation run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use seedgen_generate::{BatchOutput, generate_insert_queries, seeded_rng};
use seedgen_ingest::{load_information_schema_csv, load_tables_info, select_tables};
use seedgen_model::{GenerateOptions, TablesInfo};
use seedgen_output::{
    TABLE_INFO_FILE_NAME, default_sql_file_name, write_sql_script, write_tables_info_json,
};

/// Database name used when the metadata names none.
pub const FALLBACK_DATABASE: &str = "database";

/// Where table metadata comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// A `table_info.json` document.
    Json,
    /// A CSV export of `INFORMATION_SCHEMA.COLUMNS` for `database`.
    InformationSchemaCsv { database: String },
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub metadata_path: PathBuf,
    pub source: MetadataSource,
    pub schema: Option<String>,
    pub tables: Vec<String>,
    pub options: GenerateOptions,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub database: String,
    pub output_dir: PathBuf,
    pub sql_script: Option<PathBuf>,
    pub table_info: Option<PathBuf>,
    pub batch: BatchOutput,
}

impl GenerateResult {
    pub fn has_errors(&self) -> bool {
        self.batch.has_errors()
    }
}

/// Load metadata from `path` and apply the schema/table selection.
pub fn load_metadata(
    path: &Path,
    source: &MetadataSource,
    schema: Option<&str>,
    tables: &[String],
) -> Result<TablesInfo> {
    let info = match source {
        MetadataSource::Json => load_tables_info(path)?,
        MetadataSource::InformationSchemaCsv { database } => {
            load_information_schema_csv(path, database)?
        }
    };
    Ok(select_tables(&info, schema, tables)?)
}

/// Run one generation: load metadata, generate statements, write outputs.
pub fn run_generate(request: &GenerateRequest) -> Result<GenerateResult> {
    let load_start = Instant::now();
    let info = info_span!("load", path = %request.metadata_path.display()).in_scope(|| {
        load_metadata(
            &request.metadata_path,
            &request.source,
            request.schema.as_deref(),
            &request.tables,
        )
    })
    .with_context(|| format!("load metadata: {}", request.metadata_path.display()))?;
    let database = info
        .primary_database()
        .unwrap_or(FALLBACK_DATABASE)
        .to_string();
    info!(
        database = %database,
        tables = info.table_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "metadata loaded"
    );

    let generate_start = Instant::now();
    let mut rng = seeded_rng(request.options.seed);
    let batch = info_span!("generate", rows = request.options.rows)
        .in_scope(|| generate_insert_queries(&info, &request.options, &mut rng));
    info!(
        statements = batch.statements.len(),
        skipped_columns = batch.skipped_column_count(),
        duration_ms = generate_start.elapsed().as_millis(),
        "generation complete"
    );

    let mut result = GenerateResult {
        database,
        output_dir: request.output_dir.clone(),
        sql_script: None,
        table_info: None,
        batch,
    };
    if request.dry_run {
        info!("dry run, no files written");
        return Ok(result);
    }

    let _export = info_span!("export", output_dir = %request.output_dir.display()).entered();
    let table_info = request.output_dir.join(TABLE_INFO_FILE_NAME);
    write_tables_info_json(&table_info, &info).context("export table metadata")?;
    let sql_script = request
        .output_dir
        .join(default_sql_file_name(&result.database));
    write_sql_script(&sql_script, &result.batch.statements).context("export SQL script")?;
    result.table_info = Some(table_info);
    result.sql_script = Some(sql_script);
    Ok(result)
}
