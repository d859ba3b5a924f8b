//! Front matter preceding the AI analysis.

use super::ReportOptions;
use crate::error::Result;
use crate::media::embed_image;
use crate::model::{
    Alignment, Block, Document, Paragraph, ParagraphStyle, Table, TableBorders, TableCell,
    TableRow, TextRun,
};
use crate::request::ReportRequest;

const TITLE_SPACE_AFTER: u32 = 300;
const FIRST_SECTION_SPACING: (u32, u32) = (200, 200);
const SECTION_SPACING: (u32, u32) = (400, 200);

/// Builds the title, the context block, the optional plan image and the
/// analysis heading, in that order.
///
/// The analysis heading is the last block, so transcoded Markdown can be
/// appended directly after it.
pub fn compose_preamble(
    request: &ReportRequest,
    options: &ReportOptions,
    document: &mut Document,
) -> Result<Vec<Block>> {
    let labels = &options.labels;
    let mut blocks = Vec::new();

    blocks.push(Block::Paragraph(Paragraph::styled_text(
        ParagraphStyle::title()
            .aligned(Alignment::Center)
            .spaced(None, Some(TITLE_SPACE_AFTER)),
        &labels.title,
    )));

    blocks.push(section_heading(&labels.context_heading, FIRST_SECTION_SPACING));
    blocks.push(Block::Table(context_block(
        &labels.context_label,
        &request.context_text,
        &labels.request_label,
        &request.prompt_text,
    )));

    if let Some(ref bytes) = request.reference_image {
        let reference = embed_image(document, "reference plan", bytes, options.plan_box)?;
        blocks.push(section_heading(&labels.plan_heading, SECTION_SPACING));
        let mut figure = Paragraph::with_style(ParagraphStyle::new().aligned(Alignment::Center));
        figure.push_image(reference);
        blocks.push(Block::Paragraph(figure));
    }

    blocks.push(section_heading(&labels.analysis_heading, SECTION_SPACING));

    Ok(blocks)
}

fn section_heading(text: &str, (before, after): (u32, u32)) -> Block {
    Block::Paragraph(Paragraph::styled_text(
        ParagraphStyle::heading(1).spaced(Some(before), Some(after)),
        text,
    ))
}

/// Single full-width cell with the two labelled fields.
fn context_block(
    context_label: &str,
    context: &str,
    request_label: &str,
    prompt: &str,
) -> Table {
    let mut context_title = Paragraph::new();
    context_title.push_text(TextRun::bold(context_label));
    let mut request_title = Paragraph::new();
    request_title.push_text(TextRun::bold(request_label));

    let cell = TableCell::with_content(vec![
        context_title,
        Paragraph::text(context),
        Paragraph::new(),
        request_title,
        Paragraph::text(prompt),
    ])
    .with_width(100.0);

    Table::with_rows(vec![TableRow {
        cells: vec![cell],
        is_header: false,
    }])
    .with_borders(TableBorders::grid())
}
