//! Line-oriented Markdown transcoder.

use super::inline::split_bold;
use super::line::LineKind;
use super::table::build_table;
use crate::model::{Block, Paragraph, ParagraphStyle, TextRun};

/// Space before headings, in twentieths of a point, indexed by level.
const HEADING_SPACE_BEFORE: [u32; 3] = [400, 300, 200];

/// Scanner state between lines.
#[derive(Debug, Default)]
enum ScanState {
    /// Not inside a table block.
    #[default]
    Scanning,
    /// Collecting consecutive pipe-table rows.
    InTable(Vec<String>),
}

/// Incremental transcoder from the restricted Markdown dialect to blocks.
///
/// Feed lines with [`push_line`](Self::push_line) and collect the output
/// with [`finish`](Self::finish). The transcoder never fails: anything it
/// does not recognise becomes plain paragraph text.
///
/// # Example
///
/// ```
/// use plan2docx::markdown::Transcoder;
///
/// let mut transcoder = Transcoder::new();
/// transcoder.push_line("# Rapport");
/// transcoder.push_line("| Zone | Surface |");
/// let blocks = transcoder.finish();
/// assert_eq!(blocks.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Transcoder {
    state: ScanState,
    output: Vec<Block>,
}

impl Transcoder {
    /// Creates a transcoder with an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one input line.
    pub fn push_line(&mut self, line: &str) {
        let kind = LineKind::classify(line);

        if let LineKind::TableRow(row) = kind {
            match &mut self.state {
                ScanState::InTable(rows) => rows.push(row.to_string()),
                ScanState::Scanning => self.state = ScanState::InTable(vec![row.to_string()]),
            }
            return;
        }

        self.flush_table();
        self.output.push(Block::Paragraph(paragraph_for(kind)));
    }

    /// Flushes any pending table and returns the blocks in input order.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.output
    }

    /// Returns true while a table block is being collected.
    pub fn in_table(&self) -> bool {
        matches!(self.state, ScanState::InTable(_))
    }

    fn flush_table(&mut self) {
        if let ScanState::InTable(rows) = std::mem::take(&mut self.state) {
            self.output.push(Block::Table(build_table(&rows)));
        }
    }
}

/// Builds the paragraph for a non-table line.
fn paragraph_for(kind: LineKind<'_>) -> Paragraph {
    match kind {
        LineKind::Blank => Paragraph::new(),
        LineKind::Heading(level, text) => {
            let before = HEADING_SPACE_BEFORE[usize::from(level.clamp(1, 3)) - 1];
            let style = ParagraphStyle::heading(level).spaced(Some(before), None);
            let mut paragraph = Paragraph::with_style(style);
            paragraph.push_text(TextRun::new(text));
            paragraph
        }
        LineKind::Bullet(text) => runs_paragraph(ParagraphStyle::bullet(0), text),
        LineKind::Text(text) => runs_paragraph(ParagraphStyle::default(), text),
        // Rows are intercepted by push_line
        LineKind::TableRow(row) => runs_paragraph(ParagraphStyle::default(), row),
    }
}

fn runs_paragraph(style: ParagraphStyle, text: &str) -> Paragraph {
    let mut paragraph = Paragraph::with_style(style);
    for run in split_bold(text) {
        paragraph.push_text(run);
    }
    paragraph
}

/// Transcodes a whole Markdown string.
///
/// Lines are split like [`str::lines`]: a trailing newline does not add an
/// extra empty line, and `\r\n` endings are accepted.
pub fn transcode(markdown: &str) -> Vec<Block> {
    let mut transcoder = Transcoder::new();
    for line in markdown.lines() {
        transcoder.push_line(line);
    }
    let blocks = transcoder.finish();
    log::debug!("Transcoded {} blocks", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn paragraph(block: &Block) -> &Paragraph {
        block.as_paragraph().expect("expected paragraph")
    }

    fn table(block: &Block) -> &Table {
        block.as_table().expect("expected table")
    }

    fn runs(block: &Block) -> Vec<(String, bool)> {
        paragraph(block)
            .runs()
            .map(|r| (r.text.clone(), r.style.bold))
            .collect()
    }

    #[test]
    fn test_headings() {
        let blocks = transcode("### Title\n## Title\n# Title");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| paragraph(b).style.heading_level)
            .collect();
        assert_eq!(levels, vec![3, 2, 1]);
        for block in &blocks {
            assert_eq!(paragraph(block).plain_text(), "Title");
        }
    }

    #[test]
    fn test_heading_text_not_bold_split() {
        let blocks = transcode("## A **B** C");
        let p = paragraph(&blocks[0]);
        assert_eq!(p.content.len(), 1);
        assert_eq!(p.plain_text(), "A **B** C");
    }

    #[test]
    fn test_heading_spacing() {
        let blocks = transcode("# One\n## Two\n### Three");
        let before: Vec<Option<u32>> = blocks
            .iter()
            .map(|b| paragraph(b).style.space_before)
            .collect();
        assert_eq!(before, vec![Some(400), Some(300), Some(200)]);
    }

    #[test]
    fn test_bullets_strip_prefix() {
        let blocks = transcode("- Item\n* Item");
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            let p = paragraph(block);
            assert_eq!(p.style.bullet_level, Some(0));
            assert_eq!(p.plain_text(), "Item");
        }
    }

    #[test]
    fn test_bullet_bold_runs() {
        let blocks = transcode("- **Surface** : 25m²");
        assert_eq!(
            runs(&blocks[0]),
            vec![
                ("".to_string(), false),
                ("Surface".to_string(), true),
                (" : 25m²".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_blank_lines() {
        let blocks = transcode("\n\n\n");
        assert_eq!(blocks.len(), 3);
        for block in &blocks {
            let p = paragraph(block);
            assert!(p.is_empty());
            assert!(!p.style.is_heading());
            assert!(!p.style.is_list_item());
        }
    }

    #[test]
    fn test_table_row_count_excludes_separators() {
        let blocks = transcode("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(blocks.len(), 1);
        assert_eq!(table(&blocks[0]).row_count(), 3);
    }

    #[test]
    fn test_table_flushed_at_end_of_input() {
        let mut transcoder = Transcoder::new();
        transcoder.push_line("| a |");
        assert!(transcoder.in_table());
        let blocks = transcoder.finish();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].as_table().is_some());
    }

    #[test]
    fn test_pipe_pair_is_one_empty_cell() {
        let blocks = transcode("||");
        assert_eq!(blocks.len(), 1);
        assert_eq!(table(&blocks[0]).cell_texts(), vec![vec![""]]);
    }

    #[test]
    fn test_two_tables_split_by_text() {
        let blocks = transcode("| a |\ntext\n| b |");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].as_table().is_some());
        assert_eq!(paragraph(&blocks[1]).plain_text(), "text");
        assert!(blocks[2].as_table().is_some());
    }

    #[test]
    fn test_blank_line_closes_table() {
        let blocks = transcode("| a |\n\n| b |");
        assert_eq!(blocks.len(), 3);
        assert!(paragraph(&blocks[1]).is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let markdown = "# Rapport\n\
                        | Zone | Surface |\n\
                        |---|---|\n\
                        | Salon | 25m² |\n\
                        \n\
                        Texte **important** ici.\n";
        let blocks = transcode(markdown);
        assert_eq!(blocks.len(), 4);

        let heading = paragraph(&blocks[0]);
        assert_eq!(heading.style.heading_level, 1);
        assert_eq!(heading.plain_text(), "Rapport");

        assert_eq!(
            table(&blocks[1]).cell_texts(),
            vec![vec!["Zone", "Surface"], vec!["Salon", "25m²"]]
        );

        assert!(paragraph(&blocks[2]).is_empty());

        assert_eq!(
            runs(&blocks[3]),
            vec![
                ("Texte ".to_string(), false),
                ("important".to_string(), true),
                (" ici.".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_unsupported_syntax_is_verbatim() {
        let input = "> quote\n1. first\n```rust\n![img](a.png)";
        let blocks = transcode(input);
        let texts: Vec<String> = blocks.iter().map(|b| paragraph(b).plain_text()).collect();
        assert_eq!(texts, vec!["> quote", "1. first", "```rust", "![img](a.png)"]);
    }

    #[test]
    fn test_crlf_input() {
        let blocks = transcode("# A\r\n- b\r\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(paragraph(&blocks[0]).plain_text(), "A");
        assert_eq!(paragraph(&blocks[1]).plain_text(), "b");
    }

    #[test]
    fn test_empty_input() {
        assert!(transcode("").is_empty());
    }
}
