use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use seedgen_cli::pipeline::GenerateResult;
use seedgen_generate::{SkippedColumn, TableReport};

pub fn print_summary(result: &GenerateResult) {
    println!("Database: {}", result.database);
    match (&result.sql_script, &result.table_info) {
        (Some(script), Some(metadata)) => {
            println!("SQL script: {}", script.display());
            println!("Table metadata: {}", metadata.display());
        }
        _ => println!("Output: dry run, nothing written"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schema"),
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Requested"),
        header_cell("Generated"),
        header_cell("Failed"),
        header_cell("Skipped"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_requested = 0usize;
    let mut total_generated = 0usize;
    let mut total_failed = 0usize;
    let mut total_skipped = 0usize;
    let mut total_errors = 0usize;
    for report in &result.batch.tables {
        total_requested = total_requested.saturating_add(report.rows_requested);
        total_generated = total_generated.saturating_add(report.rows_generated);
        total_failed = total_failed.saturating_add(report.rows_failed);
        total_skipped = total_skipped.saturating_add(report.skipped_columns.len());
        total_errors = total_errors.saturating_add(report.errors.len());
        table.add_row(vec![
            dim_cell(&report.schema),
            table_cell(report),
            Cell::new(report.columns),
            Cell::new(report.rows_requested),
            generated_cell(report),
            count_cell(report.rows_failed, Color::Red),
            count_cell(report.skipped_columns.len(), Color::Yellow),
            count_cell(report.errors.len(), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} tables", result.batch.tables.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_requested).add_attribute(Attribute::Bold),
        Cell::new(total_generated).add_attribute(Attribute::Bold),
        count_cell(total_failed, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_skipped_table(&result.batch.tables);
    print_errors(&result.batch.tables);
}

fn print_skipped_table(reports: &[TableReport]) {
    let skipped: Vec<(&TableReport, &SkippedColumn)> = reports
        .iter()
        .flat_map(|report| report.skipped_columns.iter().map(move |column| (report, column)))
        .collect();
    if skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Column"),
        header_cell("Data type"),
    ]);
    apply_table_style(&mut table);
    for (report, column) in skipped {
        table.add_row(vec![
            Cell::new(format!("{}.{}", report.schema, report.table)),
            Cell::new(&column.column),
            Cell::new(&column.data_type).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped columns (unknown format):");
    println!("{table}");
}

fn print_errors(reports: &[TableReport]) {
    let errors: Vec<(&TableReport, &String)> = reports
        .iter()
        .flat_map(|report| report.errors.iter().map(move |error| (report, error)))
        .collect();
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for (report, error) in errors {
        eprintln!("- {}.{}: {error}", report.schema, report.table);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_cell(report: &TableReport) -> Cell {
    let cell = Cell::new(&report.table).add_attribute(Attribute::Bold);
    if report.has_errors() {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Blue)
    }
}

fn generated_cell(report: &TableReport) -> Cell {
    if report.rows_generated < report.rows_requested {
        Cell::new(report.rows_generated)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(report.rows_generated).fg(Color::Green)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
