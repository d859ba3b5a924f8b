//! Pipe-table block parsing.

use super::line::TABLE_PIPE;
use crate::model::{Paragraph, Table, TableBorders, TableCell, TableRow};

/// Shading applied to the first row of every table block.
pub const HEADER_SHADING: &str = "E0E0E0";

/// Run of hyphens that marks a header/body separator row.
const SEPARATOR_MARK: &str = "---";

/// Returns true for separator rows such as `|---|:---:|`.
pub fn is_separator_row(line: &str) -> bool {
    line.contains(SEPARATOR_MARK)
}

/// Splits one table row into trimmed cell texts.
///
/// Only the empty segments produced by the outer pipes are discarded;
/// interior empty cells are kept so columns stay aligned.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut segments: Vec<&str> = line.split(TABLE_PIPE).collect();

    if segments.first().is_some_and(|s| s.trim().is_empty()) {
        segments.remove(0);
    }
    if segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }

    segments.into_iter().map(|s| s.trim().to_string()).collect()
}

/// Converts a buffered block of table lines into a table.
///
/// Rows are not padded to a common width; ragged input is passed through.
pub fn build_table<S: AsRef<str>>(lines: &[S]) -> Table {
    let rows: Vec<TableRow> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !is_separator_row(line))
        .enumerate()
        .map(|(index, line)| build_row(line, index == 0))
        .collect();

    let table = Table::with_rows(rows).with_borders(TableBorders::grid());
    if table.is_ragged() {
        log::warn!(
            "Table with ragged rows ({} rows, widest {} cells) kept as-is",
            table.row_count(),
            table.column_count()
        );
    }
    table
}

fn build_row(line: &str, is_header: bool) -> TableRow {
    let texts = split_cells(line);
    let width = if texts.is_empty() {
        100.0
    } else {
        100.0 / texts.len() as f32
    };

    let cells = texts
        .into_iter()
        .map(|text| {
            let cell = TableCell::with_content(vec![Paragraph::text(text)]).with_width(width);
            if is_header {
                cell.with_background(HEADER_SHADING)
            } else {
                cell
            }
        })
        .collect();

    TableRow { cells, is_header }
}
