//! WordprocessingML for paragraphs, runs, tables and inline pictures.

use super::parts::{rel_types, Relationships, BULLET_LEVELS, BULLET_NUM_ID};
use super::xml::XmlSink;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Border, BorderStyle, ImageRef, InlineContent, Paragraph, ParagraphStyle,
    Resource, Table, TableBorders, TableCell, TableRow, TextRun, TextStyle, MAX_HEADING_LEVEL,
};
use std::collections::BTreeMap;

/// Namespaces declared on the root element of document and header parts.
pub const PART_NAMESPACES: [(&str, &str); 5] = [
    (
        "xmlns:w",
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    ),
    (
        "xmlns:r",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    ),
    (
        "xmlns:wp",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing",
    ),
    (
        "xmlns:a",
        "http://schemas.openxmlformats.org/drawingml/2006/main",
    ),
    (
        "xmlns:pic",
        "http://schemas.openxmlformats.org/drawingml/2006/picture",
    ),
];

const PICTURE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// English Metric Units per CSS pixel (96 dpi).
const EMU_PER_PIXEL: u64 = 9525;

/// Table width in fiftieths of a percent (100%).
const FULL_WIDTH_PCT: u32 = 5000;

/// Text area width of an A4 page with 1" margins, in twips.
pub const CONTENT_WIDTH_TWIPS: u32 = 9026;

/// Source of unique drawing ids shared by every part of one package.
#[derive(Debug, Default)]
pub struct DrawingIds {
    next: u32,
}

impl DrawingIds {
    fn next(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

/// Writes blocks of one part and records the relationships they need.
pub struct PartWriter<'a> {
    sink: XmlSink,
    resources: &'a BTreeMap<String, Resource>,
    drawing_ids: &'a mut DrawingIds,
    /// Relationships of this part
    pub rels: Relationships,
}

impl<'a> PartWriter<'a> {
    pub fn new(
        resources: &'a BTreeMap<String, Resource>,
        drawing_ids: &'a mut DrawingIds,
    ) -> Result<Self> {
        Ok(Self {
            sink: XmlSink::new()?,
            resources,
            drawing_ids,
            rels: Relationships::new(),
        })
    }

    /// Direct access to the underlying writer for part-specific elements.
    pub fn sink(&mut self) -> &mut XmlSink {
        &mut self.sink
    }

    /// Finishes the part, returning its XML and relationships.
    pub fn finish(self) -> (Vec<u8>, Relationships) {
        (self.sink.into_bytes(), self.rels)
    }

    /// Writes a block sequence.
    pub fn write_blocks(&mut self, blocks: &[Block]) -> Result<()> {
        for block in blocks {
            match block {
                Block::Paragraph(paragraph) => self.write_paragraph(paragraph)?,
                Block::Table(table) => self.write_table(table)?,
            }
        }
        Ok(())
    }

    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.sink.open("w:p", &[])?;
        self.write_paragraph_properties(&paragraph.style)?;
        for item in &paragraph.content {
            match item {
                InlineContent::Text(run) => self.write_run(run)?,
                InlineContent::LineBreak => {
                    self.sink.open("w:r", &[])?;
                    self.sink.empty("w:br", &[])?;
                    self.sink.close("w:r")?;
                }
                InlineContent::Image(image) => self.write_image(image)?,
            }
        }
        self.sink.close("w:p")
    }

    fn write_paragraph_properties(&mut self, style: &ParagraphStyle) -> Result<()> {
        let style_id = paragraph_style_id(style);
        let has_spacing = style.space_before.is_some() || style.space_after.is_some();
        if style_id.is_none()
            && !style.bottom_rule
            && !has_spacing
            && style.alignment == Alignment::Left
        {
            return Ok(());
        }

        // Child order follows CT_PPr
        self.sink.open("w:pPr", &[])?;
        if let Some(id) = style_id {
            self.sink.empty("w:pStyle", &[("w:val", id)])?;
        }
        if let Some(level) = style.bullet_level {
            let level = level.min(BULLET_LEVELS - 1).to_string();
            self.sink.open("w:numPr", &[])?;
            self.sink.empty("w:ilvl", &[("w:val", level.as_str())])?;
            self.sink.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
            self.sink.close("w:numPr")?;
        }
        if style.bottom_rule {
            self.sink.open("w:pBdr", &[])?;
            self.sink.empty(
                "w:bottom",
                &[
                    ("w:val", "single"),
                    ("w:sz", "6"),
                    ("w:space", "1"),
                    ("w:color", "auto"),
                ],
            )?;
            self.sink.close("w:pBdr")?;
        }
        if has_spacing {
            let before = style.space_before.map(|v| v.to_string());
            let after = style.space_after.map(|v| v.to_string());
            let mut attrs = Vec::new();
            if let Some(ref v) = before {
                attrs.push(("w:before", v.as_str()));
            }
            if let Some(ref v) = after {
                attrs.push(("w:after", v.as_str()));
            }
            self.sink.empty("w:spacing", &attrs)?;
        }
        if style.alignment != Alignment::Left {
            self.sink
                .empty("w:jc", &[("w:val", justification(style.alignment))])?;
        }
        self.sink.close("w:pPr")
    }

    fn write_run(&mut self, run: &TextRun) -> Result<()> {
        self.sink.open("w:r", &[])?;
        self.write_run_properties(&run.style)?;
        self.sink
            .text_element("w:t", &[("xml:space", "preserve")], &run.text)?;
        self.sink.close("w:r")
    }

    fn write_run_properties(&mut self, style: &TextStyle) -> Result<()> {
        if !style.has_formatting() {
            return Ok(());
        }
        self.sink.open("w:rPr", &[])?;
        if style.bold {
            self.sink.empty("w:b", &[])?;
        }
        if style.italic {
            self.sink.empty("w:i", &[])?;
        }
        if let Some(ref color) = style.color {
            self.sink.empty("w:color", &[("w:val", color.as_str())])?;
        }
        if let Some(points) = style.font_size {
            let half_points = ((points * 2.0).round() as u32).max(1).to_string();
            self.sink.empty("w:sz", &[("w:val", half_points.as_str())])?;
            self.sink.empty("w:szCs", &[("w:val", half_points.as_str())])?;
        }
        self.sink.close("w:rPr")
    }

    fn write_image(&mut self, image: &ImageRef) -> Result<()> {
        if !self.resources.contains_key(&image.id) {
            return Err(Error::ResourceNotFound(image.id.clone()));
        }
        let rel_id = self
            .rels
            .add(rel_types::IMAGE, format!("media/{}", image.id));
        let drawing_id = self.drawing_ids.next().to_string();
        let name = format!("Picture {}", drawing_id);
        let cx = (u64::from(image.width) * EMU_PER_PIXEL).to_string();
        let cy = (u64::from(image.height) * EMU_PER_PIXEL).to_string();

        let s = &mut self.sink;
        s.open("w:r", &[])?;
        s.open("w:drawing", &[])?;
        s.open(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        s.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        s.empty(
            "wp:docPr",
            &[("id", drawing_id.as_str()), ("name", name.as_str())],
        )?;
        s.open("a:graphic", &[])?;
        s.open("a:graphicData", &[("uri", PICTURE_URI)])?;
        s.open("pic:pic", &[])?;

        s.open("pic:nvPicPr", &[])?;
        s.empty(
            "pic:cNvPr",
            &[("id", drawing_id.as_str()), ("name", image.id.as_str())],
        )?;
        s.empty("pic:cNvPicPr", &[])?;
        s.close("pic:nvPicPr")?;

        s.open("pic:blipFill", &[])?;
        s.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
        s.open("a:stretch", &[])?;
        s.empty("a:fillRect", &[])?;
        s.close("a:stretch")?;
        s.close("pic:blipFill")?;

        s.open("pic:spPr", &[])?;
        s.open("a:xfrm", &[])?;
        s.empty("a:off", &[("x", "0"), ("y", "0")])?;
        s.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        s.close("a:xfrm")?;
        s.open("a:prstGeom", &[("prst", "rect")])?;
        s.empty("a:avLst", &[])?;
        s.close("a:prstGeom")?;
        s.close("pic:spPr")?;

        s.close("pic:pic")?;
        s.close("a:graphicData")?;
        s.close("a:graphic")?;
        s.close("wp:inline")?;
        s.close("w:drawing")?;
        s.close("w:r")
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        if table.rows.is_empty() {
            return Err(Error::Serialization("table has no rows".into()));
        }
        if let Some(index) = table.rows.iter().position(|r| r.cells.is_empty()) {
            return Err(Error::Serialization(format!(
                "table row {} has no cells",
                index + 1
            )));
        }

        let full_width = FULL_WIDTH_PCT.to_string();
        self.sink.open("w:tbl", &[])?;
        self.sink.open("w:tblPr", &[])?;
        self.sink
            .empty("w:tblW", &[("w:w", full_width.as_str()), ("w:type", "pct")])?;
        self.write_table_borders(&table.borders)?;
        self.sink.close("w:tblPr")?;

        let columns = table.column_count();
        let grid_width = (CONTENT_WIDTH_TWIPS / columns as u32).to_string();
        self.sink.open("w:tblGrid", &[])?;
        for _ in 0..columns {
            self.sink.empty("w:gridCol", &[("w:w", grid_width.as_str())])?;
        }
        self.sink.close("w:tblGrid")?;

        for row in &table.rows {
            self.write_row(row)?;
        }
        self.sink.close("w:tbl")
    }

    fn write_table_borders(&mut self, borders: &TableBorders) -> Result<()> {
        self.sink.open("w:tblBorders", &[])?;
        for edge in ["w:top", "w:left", "w:bottom", "w:right"] {
            self.write_border(edge, &borders.outer)?;
        }
        for edge in ["w:insideH", "w:insideV"] {
            self.write_border(edge, &borders.inner)?;
        }
        self.sink.close("w:tblBorders")
    }

    fn write_border(&mut self, edge: &str, border: &Border) -> Result<()> {
        match border.style {
            BorderStyle::None => self.sink.empty(edge, &[("w:val", "nil")]),
            BorderStyle::Single => {
                let size = border.size.to_string();
                self.sink.empty(
                    edge,
                    &[
                        ("w:val", "single"),
                        ("w:sz", size.as_str()),
                        ("w:space", "0"),
                        ("w:color", border.color.as_str()),
                    ],
                )
            }
        }
    }

    fn write_row(&mut self, row: &TableRow) -> Result<()> {
        self.sink.open("w:tr", &[])?;
        if row.is_header {
            self.sink.open("w:trPr", &[])?;
            self.sink.empty("w:tblHeader", &[])?;
            self.sink.close("w:trPr")?;
        }
        for cell in &row.cells {
            self.write_cell(cell)?;
        }
        self.sink.close("w:tr")
    }

    fn write_cell(&mut self, cell: &TableCell) -> Result<()> {
        self.sink.open("w:tc", &[])?;
        self.sink.open("w:tcPr", &[])?;
        match cell.width_percent {
            Some(percent) => {
                let width = ((percent * 50.0).round() as u32).to_string();
                self.sink
                    .empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "pct")])?;
            }
            None => self.sink.empty("w:tcW", &[("w:w", "0"), ("w:type", "auto")])?,
        }
        if let Some(ref fill) = cell.background_color {
            self.sink.empty(
                "w:shd",
                &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill.as_str())],
            )?;
        }
        self.sink.close("w:tcPr")?;

        // A cell must end with a paragraph
        if cell.content.is_empty() {
            self.write_paragraph(&Paragraph::new())?;
        }
        for paragraph in &cell.content {
            self.write_paragraph(paragraph)?;
        }
        self.sink.close("w:tc")
    }
}

/// Style id referenced by `w:pStyle`, if any.
fn paragraph_style_id(style: &ParagraphStyle) -> Option<&'static str> {
    if style.title {
        return Some("Title");
    }
    match style.heading_level.min(MAX_HEADING_LEVEL) {
        1 => Some("Heading1"),
        2 => Some("Heading2"),
        3 => Some("Heading3"),
        _ if style.bullet_level.is_some() => Some("ListParagraph"),
        _ => None,
    }
}

fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::transcode;

    fn render(blocks: &[Block], resources: &BTreeMap<String, Resource>) -> Result<String> {
        let mut ids = DrawingIds::default();
        let mut writer = PartWriter::new(resources, &mut ids)?;
        writer.write_blocks(blocks)?;
        let (xml, _) = writer.finish();
        Ok(String::from_utf8(xml).expect("utf-8"))
    }

    #[test]
    fn test_heading_and_bold_runs() {
        let xml = render(&transcode("## Étude\nTexte **gras**"), &BTreeMap::new()).unwrap();
        assert!(xml.contains("<w:pStyle w:val=\"Heading2\"/>"));
        assert!(xml.contains("<w:spacing w:before=\"300\"/>"));
        assert!(xml.contains("<w:rPr><w:b/></w:rPr><w:t xml:space=\"preserve\">gras</w:t>"));
    }

    #[test]
    fn test_bullet_numbering() {
        let xml = render(&transcode("- Item"), &BTreeMap::new()).unwrap();
        assert!(xml.contains("<w:pStyle w:val=\"ListParagraph\"/>"));
        assert!(xml.contains("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>"));
    }

    #[test]
    fn test_table_markup() {
        let xml = render(&transcode("| A | B |\n|---|---|\n| 1 | 2 |"), &BTreeMap::new()).unwrap();
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert_eq!(xml.matches("<w:gridCol ").count(), 2);
        assert!(xml.contains("<w:tcW w:w=\"2500\" w:type=\"pct\"/>"));
        assert!(xml.contains("w:fill=\"E0E0E0\""));
        assert!(xml.contains("<w:tblHeader/>"));
    }

    #[test]
    fn test_row_without_cells_fails() {
        let result = render(&transcode("| A |\n|"), &BTreeMap::new());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_pipe_pair_packs_as_empty_cell() {
        let xml = render(&transcode("| A |\n||"), &BTreeMap::new()).unwrap();
        assert_eq!(xml.matches("<w:tc>").count(), 2);
        assert!(xml.contains("<w:tcW w:w=\"5000\" w:type=\"pct\"/>"));
    }

    #[test]
    fn test_cell_paragraph_keeps_own_alignment() {
        let logo = Paragraph::with_style(ParagraphStyle::new().aligned(Alignment::Right));
        let table = Table::with_rows(vec![TableRow {
            cells: vec![
                TableCell::with_content(vec![Paragraph::text("Nom")]).with_width(70.0),
                TableCell::with_content(vec![logo]).with_width(30.0),
            ],
            is_header: false,
        }]);
        let xml = render(&[Block::Table(table)], &BTreeMap::new()).unwrap();
        assert_eq!(xml.matches("<w:jc ").count(), 1);
        assert!(xml.contains("<w:jc w:val=\"right\"/>"));
    }

    #[test]
    fn test_table_of_only_separators_fails() {
        let result = render(&transcode("|---|---|"), &BTreeMap::new());
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_missing_image_resource() {
        let mut paragraph = Paragraph::new();
        paragraph.push_image(ImageRef::new("image9.png", 10, 10));
        let result = render(&[Block::Paragraph(paragraph)], &BTreeMap::new());
        assert!(matches!(result, Err(Error::ResourceNotFound(_))));
    }

    #[test]
    fn test_image_drawing() {
        let mut resources = BTreeMap::new();
        resources.insert(
            "image1.png".to_string(),
            Resource::image(vec![1, 2, 3], "image/png", 20, 10),
        );
        let mut paragraph = Paragraph::new();
        paragraph.push_image(ImageRef::new("image1.png", 100, 50));

        let mut ids = DrawingIds::default();
        let mut writer = PartWriter::new(&resources, &mut ids).unwrap();
        writer.write_blocks(&[Block::Paragraph(paragraph)]).unwrap();
        let (xml, rels) = writer.finish();
        let xml = String::from_utf8(xml).unwrap();

        assert!(xml.contains("<wp:extent cx=\"952500\" cy=\"476250\"/>"));
        assert!(xml.contains("<a:blip r:embed=\"rId1\"/>"));
        let rels = String::from_utf8(rels.to_xml().unwrap()).unwrap();
        assert!(rels.contains("Target=\"media/image1.png\""));
    }

    #[test]
    fn test_empty_runs_are_kept() {
        let xml = render(&transcode("**A**"), &BTreeMap::new()).unwrap();
        assert_eq!(xml.matches("<w:r>").count(), 3);
    }
}
