//! Run summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::{ProcessReport, ValidateReport};

pub fn print_process_summary(report: &ProcessReport) {
    println!("Survey: {}", report.survey);
    let mut table = Table::new();
    table.set_header(vec![
        "File",
        "Captured",
        "Rows",
        "Row errors",
        "Unmapped",
        "Public",
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(display_name(&file.source)),
            Cell::new(
                file.taken_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(file.rows_written),
            Cell::new(file.row_errors.len()),
            Cell::new(file.unmapped_headers.len()),
            Cell::new(if file.public_output.is_some() { "yes" } else { "-" }),
        ]);
    }
    println!("{table}");

    for file in &report.files {
        for error in &file.row_errors {
            println!(
                "  {}: row {}: {}",
                display_name(&file.source),
                error.row,
                error.reason
            );
        }
    }
}

pub fn print_validate_summary(report: &ValidateReport) {
    println!("Survey: {}", report.survey);
    let mut table = Table::new();
    table.set_header(vec!["File", "Pass", "Header errors", "Location errors"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &report.files {
        table.add_row(vec![
            Cell::new(display_name(&file.source)),
            Cell::new(if file.pass { "yes" } else { "NO" }),
            Cell::new(file.header_errors.len()),
            Cell::new(file.location_errors.len()),
        ]);
    }
    println!("{table}");

    for file in &report.files {
        for error in &file.header_errors {
            println!("  {}: unknown header '{}'", display_name(&file.source), error);
        }
        for error in &file.location_errors {
            println!(
                "  {}: unknown facility '{}'",
                display_name(&file.source),
                error
            );
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
