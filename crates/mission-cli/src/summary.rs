//! Run summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::CleanResult;

/// Prints the result table for a `clean` run.
pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    println!("Column: {}", result.column);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec!["Records", "Changed", "Unchanged", "Glossary entries"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        count_cell(result.records),
        count_cell(result.changed),
        count_cell(result.records - result.changed),
        count_cell(result.glossary_entries),
    ]);
    println!("{table}");
}

/// Shared table styling for CLI output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
