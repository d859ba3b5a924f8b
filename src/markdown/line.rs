//! Line classification for the restricted Markdown dialect.

/// Heading prefixes, longest first so `### x` is never read as a level-1 heading.
const HEADING_PREFIXES: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

/// Bullet prefixes.
const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

/// Character that opens a pipe-table row.
pub const TABLE_PIPE: char = '|';

/// What a single trimmed line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A pipe-table row (the whole trimmed line).
    TableRow(&'a str),
    /// Empty after trimming.
    Blank,
    /// Heading with its level and prefix-stripped text.
    Heading(u8, &'a str),
    /// Bullet item with prefix-stripped text.
    Bullet(&'a str),
    /// Anything else.
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classifies a raw line. Surrounding whitespace is ignored.
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();

        if line.starts_with(TABLE_PIPE) {
            return LineKind::TableRow(line);
        }

        if line.is_empty() {
            return LineKind::Blank;
        }

        for (prefix, level) in HEADING_PREFIXES {
            if let Some(text) = line.strip_prefix(prefix) {
                return LineKind::Heading(level, text);
            }
        }

        for prefix in BULLET_PREFIXES {
            if let Some(text) = line.strip_prefix(prefix) {
                return LineKind::Bullet(text);
            }
        }

        LineKind::Text(line)
    }

    /// Returns true for pipe-table rows.
    pub fn is_table_row(&self) -> bool {
        matches!(self, LineKind::TableRow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_precedence() {
        assert_eq!(LineKind::classify("### Title"), LineKind::Heading(3, "Title"));
        assert_eq!(LineKind::classify("## Title"), LineKind::Heading(2, "Title"));
        assert_eq!(LineKind::classify("# Title"), LineKind::Heading(1, "Title"));
    }

    #[test]
    fn test_deep_heading_is_text() {
        // Only three levels exist; four hashes stay verbatim
        assert_eq!(LineKind::classify("#### Deep"), LineKind::Text("#### Deep"));
        assert_eq!(LineKind::classify("#NoSpace"), LineKind::Text("#NoSpace"));
    }

    #[test]
    fn test_bullets() {
        assert_eq!(LineKind::classify("- Item"), LineKind::Bullet("Item"));
        assert_eq!(LineKind::classify("* Item"), LineKind::Bullet("Item"));
        assert_eq!(LineKind::classify("   - Indented"), LineKind::Bullet("Indented"));
        assert_eq!(LineKind::classify("-Item"), LineKind::Text("-Item"));
    }

    #[test]
    fn test_bold_line_is_not_bullet() {
        assert_eq!(
            LineKind::classify("**Bold** start"),
            LineKind::Text("**Bold** start")
        );
    }

    #[test]
    fn test_table_and_blank() {
        assert_eq!(LineKind::classify("  | A | B |  "), LineKind::TableRow("| A | B |"));
        assert_eq!(LineKind::classify(" \t "), LineKind::Blank);
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert!(LineKind::classify("|").is_table_row());
    }
}
