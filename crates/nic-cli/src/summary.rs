use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::DecodeResult;

/// Reports what happened to the batch on stderr, keeping stdout for the decoded output.
pub fn print_summary(result: &DecodeResult) {
    if let Some(path) = &result.output {
        eprintln!("Saved {} output to {}", result.format, path.display());
    }
    for path in &result.missing_files {
        eprintln!("Skipped missing file: {}", path.display());
    }
    for (path, reason) in &result.failed_files {
        eprintln!("Could not load {}: {reason}", path.display());
    }
    if result.summary.has_failures() {
        eprintln!(
            "{} of {} NIC numbers could not be decoded",
            result.summary.failed,
            result.summary.total()
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
