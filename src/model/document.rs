//! Document structure and metadata.

use super::{Paragraph, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// A complete report document, ready to be packed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,
    /// Header region repeated on every page
    pub header: Vec<Block>,
    /// Body content blocks
    pub content: Vec<Block>,
    /// Binary resources (images) keyed by media file name
    pub resources: BTreeMap<String, Resource>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a paragraph to the body.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.content.push(Block::Paragraph(paragraph));
    }

    /// Adds a table to the body.
    pub fn push_table(&mut self, table: Table) {
        self.content.push(Block::Table(table));
    }

    /// Registers an image resource under a fresh media name and returns the name.
    pub fn add_resource(&mut self, resource: Resource) -> String {
        let name = format!("image{}.{}", self.resources.len() + 1, resource.extension());
        self.resources.insert(name.clone(), resource);
        name
    }

    /// Returns the total number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.content
            .iter()
            .filter(|b| matches!(b, Block::Paragraph(_)))
            .count()
    }

    /// Returns the total number of body tables.
    pub fn table_count(&self) -> usize {
        self.content
            .iter()
            .filter(|b| matches!(b, Block::Table(_)))
            .count()
    }

    /// Returns the plain text content of the body.
    pub fn plain_text(&self) -> String {
        blocks_plain_text(&self.content)
    }
}

/// Joins the plain text of a block sequence with newlines.
pub fn blocks_plain_text(blocks: &[Block]) -> String {
    let mut result = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(p) => result.push(p.plain_text()),
            Block::Table(t) => {
                for row in &t.rows {
                    for cell in &row.cells {
                        result.push(cell.plain_text());
                    }
                }
            }
        }
    }
    result.join("\n")
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Creation date (ISO 8601 format)
    pub created: Option<String>,
}

/// A block-level content element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

impl Block {
    /// Returns the paragraph, if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        }
    }

    /// Returns the table, if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        }
    }
}

/// A decoded binary image resource.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// MIME type
    pub mime_type: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Binary data
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Resource {
    /// Creates an image resource.
    pub fn image(data: Vec<u8>, mime_type: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            mime_type: mime_type.into(),
            width,
            height,
            data,
        }
    }

    /// Returns the file extension based on MIME type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpeg",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            _ => "bin",
        }
    }
}
