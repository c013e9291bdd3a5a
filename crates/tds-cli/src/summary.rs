use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{DataFrame, DataType};

use tds_model::ExtractStats;
use tds_model::layout::{AMOUNT_PAID_COLUMN, TAX_DEDUCTED_COLUMN, TDS_DEPOSITED_COLUMN};
use tds_transform::{any_to_f64, any_to_string, column_total, format_amount};

use crate::types::{ConvertResult, InspectResult};

pub fn print_convert_summary(result: &ConvertResult, preview_rows: usize) {
    if preview_rows > 0 {
        print_preview(&result.table, preview_rows);
    }
    println!("Input: {}", result.input.display());
    match result.written {
        Some(bytes) => println!(
            "Output: {} ({} bytes, {})",
            result.output.display(),
            bytes,
            result.format.extension()
        ),
        None => println!("Output: {} (dry run, not written)", result.output.display()),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(result.table.height())]);
    table.add_row(vec![Cell::new("Deductors"), Cell::new(result.deductors)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(result.table.width())]);
    for (label, column) in [
        ("Total amount paid / credited", AMOUNT_PAID_COLUMN),
        ("Total tax deducted", TAX_DEDUCTED_COLUMN),
        ("Total TDS deposited", TDS_DEPOSITED_COLUMN),
    ] {
        let total = column_total(&result.table, column);
        table.add_row(vec![
            Cell::new(label),
            total.map_or_else(|| dim_cell("-"), |value| Cell::new(format_amount(value))),
        ]);
    }
    table.add_row(vec![
        Cell::new("Rejected lines"),
        count_cell(result.stats.rejected_total(), Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_inspect(result: &InspectResult) {
    println!("Input: {}", result.input.display());
    print_stats(&result.stats, result.deductors);

    let mut header = Table::new();
    header.set_header(vec![header_cell("#"), header_cell("Detected column")]);
    apply_table_style(&mut header);
    align_column(&mut header, 0, CellAlignment::Right);
    for (index, name) in result.header.iter().enumerate() {
        header.add_row(vec![Cell::new(index + 1), Cell::new(name)]);
    }
    println!("{header}");
}

fn print_stats(stats: &ExtractStats, deductors: usize) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Blocks"), Cell::new(stats.blocks)]);
    table.add_row(vec![
        Cell::new("Blocks without deductor"),
        Cell::new(stats.skipped_blocks),
    ]);
    table.add_row(vec![Cell::new("Deductors"), Cell::new(deductors)]);
    table.add_row(vec![Cell::new("Records"), Cell::new(stats.records)]);
    for (kind, count) in &stats.rejected {
        table.add_row(vec![
            Cell::new(format!("Rejected: {}", kind.as_str())),
            count_cell(*count, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Rejected total")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(stats.rejected_total(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Prints the first `rows` rows of the converted table.
fn print_preview(df: &DataFrame, rows: usize) {
    let shown = rows.min(df.height());
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in df.get_columns().iter().enumerate() {
        if matches!(column.dtype(), DataType::Float64 | DataType::Int64) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in 0..shown {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| {
                let value = column.get(row).ok();
                match (column.dtype(), value) {
                    (DataType::Float64, Some(value)) => match any_to_f64(value) {
                        Some(amount) => Cell::new(format_amount(amount)),
                        None => dim_cell("-"),
                    },
                    (_, Some(value)) => Cell::new(any_to_string(value)),
                    (_, None) => dim_cell("-"),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    if df.height() > shown {
        println!("... {} more rows", df.height() - shown);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
