use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use seedgen_cli::config::{GenerateSettings, load_config};
use seedgen_cli::pipeline::{GenerateRequest, GenerateResult, MetadataSource, run_generate};
use seedgen_model::{DataType, DecimalStrategy, TypeFamily};

use crate::cli::{DecimalArg, GenerateArgs, InputFormatArg};
use crate::summary::apply_table_style;

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Data type", "Family", "Generated literal"]);
    apply_table_style(&mut table);
    for data_type in DataType::SUPPORTED {
        let family = data_type.family();
        table.add_row(vec![
            data_type.to_string(),
            family.to_string(),
            literal_description(family).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn literal_description(family: TypeFamily) -> &'static str {
    match family {
        TypeFamily::Character => "'<letters>' of character_maximum_length",
        TypeFamily::Decimal => "1.55..=3.89, or fitted to precision/scale with --decimal declared",
        TypeFamily::Binary => "CAST('<letters>' AS BINARY(<length>))",
        TypeFamily::SmallInt => "-32767..=32767",
        TypeFamily::Int => "-2147483648..=2147483648",
        TypeFamily::Date => "'YYYY-MM-DD' within --date-start..=--date-end",
        TypeFamily::Unsupported => "skipped",
    }
}

pub fn run_generate_command(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("run", metadata = %args.metadata.display());
    let _guard = span.enter();

    let file_settings = match &args.config {
        Some(path) => load_config(path)?.generate,
        None => GenerateSettings::default(),
    };
    let settings = file_settings.merge(settings_from_args(args));
    let options = settings.to_options().context("resolve generation options")?;

    let source = match args.input_format {
        InputFormatArg::Json => MetadataSource::Json,
        InputFormatArg::Csv => MetadataSource::InformationSchemaCsv {
            database: args.database.clone(),
        },
    };
    let request = GenerateRequest {
        metadata_path: args.metadata.clone(),
        source,
        schema: args.schema.clone(),
        tables: args.tables.clone(),
        options,
        output_dir: settings.output_dir(),
        dry_run: args.dry_run,
    };
    run_generate(&request)
}

fn settings_from_args(args: &GenerateArgs) -> GenerateSettings {
    GenerateSettings {
        rows: args.rows,
        seed: args.seed,
        date_start: args.date_start.clone(),
        date_end: args.date_end.clone(),
        decimal: args.decimal.map(|decimal| match decimal {
            DecimalArg::Fixed => DecimalStrategy::Fixed,
            DecimalArg::Declared => DecimalStrategy::Declared,
        }),
        output_dir: args.output_dir.clone(),
    }
}
