//! Style definitions for text and paragraphs.

use serde::Serialize;

/// Text formatting style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Text color (RGB hex, without `#`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    /// Creates a new empty text style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Creates an italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Sets the font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns true if this style has any formatting.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.font_size.is_some() || self.color.is_some()
    }
}

/// Paragraph-level style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphStyle {
    /// Heading level (0 = normal paragraph, 1-3 = heading levels)
    pub heading_level: u8,
    /// Document title paragraph
    pub title: bool,
    /// Bullet nesting level, if this is a list item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_level: Option<u8>,
    /// Text alignment
    pub alignment: Alignment,
    /// Space before paragraph in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<u32>,
    /// Space after paragraph in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<u32>,
    /// Draw a full-width rule under the paragraph
    pub bottom_rule: bool,
}

impl ParagraphStyle {
    /// Creates a new default paragraph style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heading style with the specified level.
    pub fn heading(level: u8) -> Self {
        Self {
            heading_level: level.min(MAX_HEADING_LEVEL),
            ..Default::default()
        }
    }

    /// Creates the document title style.
    pub fn title() -> Self {
        Self {
            title: true,
            ..Default::default()
        }
    }

    /// Creates a bulleted list item style.
    pub fn bullet(level: u8) -> Self {
        Self {
            bullet_level: Some(level),
            ..Default::default()
        }
    }

    /// Sets the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets spacing before and after, in twentieths of a point.
    pub fn spaced(mut self, before: Option<u32>, after: Option<u32>) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Returns true if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level > 0
    }

    /// Returns true if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet_level.is_some()
    }
}

/// Deepest heading level the report styles define.
pub const MAX_HEADING_LEVEL: u8 = 3;

/// Text alignment options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}
