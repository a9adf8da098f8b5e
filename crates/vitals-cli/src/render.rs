//! comfy-table rendering for command output.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use vitals_analyze::{ComparisonSeries, MapDataset, Ranking, SeriesStats, SkippedCountry};

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
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

pub fn name_list<'a>(header: &str, names: impl Iterator<Item = &'a str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(header)]);
    apply_table_style(&mut table);
    for name in names {
        table.add_row(vec![name]);
    }
    table
}

pub fn ranking_table(ranking: &Ranking) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Country"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (position, entry) in ranking.entries.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            entry.country.clone(),
            entry.value.to_string(),
        ]);
    }
    table
}

pub fn map_table(dataset: &MapDataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Country"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &dataset.entries {
        table.add_row(vec![entry.country.clone(), entry.value.to_string()]);
    }
    table
}

pub fn series_table(series: &ComparisonSeries) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Date"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in &series.points {
        let value = point
            .value
            .map_or_else(String::new, |number| number.to_string());
        table.add_row(vec![point.date.clone(), value]);
    }
    table
}

/// Mean/median/mode block shown under a series; "N/A" for an empty series.
pub fn stats_lines(stats: Option<SeriesStats>) -> String {
    match stats {
        Some(stats) => format!(
            "Mean:   {:.2}\nMedian: {:.2}\nMode:   {:.2}",
            stats.mean, stats.median, stats.mode
        ),
        None => "Mean:   N/A\nMedian: N/A\nMode:   N/A".to_string(),
    }
}

/// One line per skipped country, naming the reason.
pub fn skipped_lines(skipped: &[SkippedCountry]) -> String {
    let mut out = String::new();
    for skip in skipped {
        let _ = writeln!(out, "skipped {} ({})", skip.country, skip.reason);
    }
    out
}
