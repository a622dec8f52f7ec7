use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rulegen_cli::output::table_summaries;
use rulegen_model::RuleCatalog;

pub fn print_summary(catalog: &RuleCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Rules"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut total_columns = 0usize;
    let mut total_rules = 0usize;
    for summary in table_summaries(catalog) {
        total_columns += summary.columns;
        total_rules += summary.rules;
        table.add_row(vec![
            Cell::new(&summary.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.columns),
            Cell::new(summary.rules),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_columns).add_attribute(Attribute::Bold),
        Cell::new(total_rules).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
