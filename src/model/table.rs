//! Table structures for document model.

use super::Paragraph;
use serde::Serialize;

/// A table in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Border set drawn around and inside the table
    pub borders: TableBorders,
}

impl Table {
    /// Creates a table from rows.
    pub fn with_rows(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Sets the border set.
    pub fn with_borders(mut self, borders: TableBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns of the widest row.
    ///
    /// Rows may be ragged, so this is the maximum rather than the first row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Returns true if rows have differing cell counts.
    pub fn is_ragged(&self) -> bool {
        let mut counts = self.rows.iter().map(|r| r.cells.len());
        match counts.next() {
            Some(first) => counts.any(|c| c != first),
            None => false,
        }
    }

    /// Returns the plain text of every cell, row by row.
    pub fn cell_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(TableCell::plain_text).collect())
            .collect()
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
    /// Whether this row is a header row (shaded, no other semantics)
    pub is_header: bool,
}

/// A cell in a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCell {
    /// Content paragraphs within this cell
    pub content: Vec<Paragraph>,
    /// Cell width as a percentage of the table width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<f32>,
    /// Background color (RGB hex)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl TableCell {
    /// Creates a cell holding the given paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    /// Sets the width as a percentage of the table width.
    pub fn with_width(mut self, percent: f32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    /// Sets the background shading.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the plain text content of this cell.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BorderStyle {
    /// No border
    #[default]
    None,
    /// Single solid line
    Single,
}

/// One border edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Border {
    /// Line style
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub size: u32,
    /// Line color (RGB hex)
    pub color: String,
}

impl Border {
    /// No border.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single line of the given width and color.
    pub fn single(size: u32, color: impl Into<String>) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
            color: color.into(),
        }
    }
}

/// Borders of a table: the outer frame and the inner grid lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableBorders {
    /// Top, bottom, left and right edges
    pub outer: Border,
    /// Lines between rows and columns
    pub inner: Border,
}

impl TableBorders {
    /// A table drawn without any lines.
    pub fn none() -> Self {
        Self::default()
    }

    /// Grey frame with lighter inner grid, used for data tables.
    pub fn grid() -> Self {
        Self {
            outer: Border::single(4, "999999"),
            inner: Border::single(4, "CCCCCC"),
        }
    }
}
