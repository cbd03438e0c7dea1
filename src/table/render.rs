use std::cmp::Ordering;

use crate::error::SummarizeError;
use crate::record::FieldValue;
use crate::stats::StatValue;
use crate::table::style::TableStyle;

const COLUMN_SEPARATOR: &str = " | ";
const RULE_CHAR: char = '-';

/// Computed stats for one group, in stat order
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: FieldValue,
    pub values: Vec<(String, StatValue)>,
}

impl SummaryRow {
    pub fn get(&self, name: &str) -> Option<StatValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// Summary rows in group insertion order
pub type ResultTable = Vec<SummaryRow>;

/// Sort rows by `sort_key` and render them as a table.
///
/// The sort is stable, so groups with equal values keep their insertion
/// order in both directions.
pub fn render_results(
    results: &[SummaryRow],
    category_label: &str,
    sort_key: &str,
    reverse: bool,
    style: &TableStyle,
) -> Result<String, SummarizeError> {
    let mut keyed = results
        .iter()
        .map(|row| {
            row.get(sort_key)
                .map(|value| (value, row))
                .ok_or_else(|| SummarizeError::MissingKey {
                    key: sort_key.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| {
        let ord: Ordering = a.total_cmp(b);
        if reverse { ord.reverse() } else { ord }
    });

    let rows: Vec<&SummaryRow> = keyed.into_iter().map(|(_, row)| row).collect();
    render_table(&rows, category_label, style)
}

/// Render rows as a column-aligned table.
///
/// Columns are taken from the first row. Every cell is left-justified to
/// its column width and a dashed rule separates the header from the body.
pub fn render_table(
    rows: &[&SummaryRow],
    category_label: &str,
    style: &TableStyle,
) -> Result<String, SummarizeError> {
    let columns: Vec<&str> = rows
        .first()
        .map(|row| row.values.iter().map(|(n, _)| n.as_str()).collect())
        .unwrap_or_default();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 2);
    grid.push(
        std::iter::once(category_label)
            .chain(columns.iter().copied())
            .map(str::to_string)
            .collect(),
    );

    for row in rows {
        let mut cells = vec![row.key.to_string()];
        for column in &columns {
            let value = row.get(column).ok_or_else(|| SummarizeError::MissingKey {
                key: column.to_string(),
            })?;
            cells.push(style.format(column, value));
        }
        grid.push(cells);
    }

    let widths: Vec<usize> = (0..=columns.len())
        .map(|i| {
            grid.iter()
                .map(|cells| cells[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    grid.insert(
        1,
        widths
            .iter()
            .map(|w| RULE_CHAR.to_string().repeat(*w))
            .collect(),
    );

    let lines: Vec<String> = grid
        .iter()
        .map(|cells| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_right(cell, *width))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Render like [`render_results`] and write the table to stdout
pub fn print_results(
    results: &[SummaryRow],
    category_label: &str,
    sort_key: &str,
    reverse: bool,
    style: &TableStyle,
) -> Result<String, SummarizeError> {
    let text = render_results(results, category_label, sort_key, reverse, style)?;
    println!("{}", text);
    Ok(text)
}

// `{:<w$}` pads by char count, matching the width computation above.
fn pad_right(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
