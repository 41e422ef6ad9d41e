use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mentions_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Publication mentions"),
        header_cell("Journal mentions"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_rows = 0usize;
    let mut total_publications = 0usize;
    let mut total_journals = 0usize;
    for source in &result.sources {
        total_rows += source.publication_rows;
        total_publications += source.publication_mentions;
        total_journals += source.journal_mentions;
        table.add_row(vec![
            Cell::new(&source.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(source.publication_rows),
            count_cell(source.publication_mentions),
            count_cell(source.journal_mentions),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_publications).add_attribute(Attribute::Bold),
        Cell::new(total_journals).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Drugs searched: {}  Records written: {} ({} duplicates removed)",
        result.drug_count,
        result.unique_records,
        result.total_records - result.unique_records
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(value: usize) -> Cell {
    if value == 0 {
        Cell::new(value).fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
