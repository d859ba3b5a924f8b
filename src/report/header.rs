//! Letterhead composition.

use crate::config::BrandingConfig;
use crate::error::Result;
use crate::media::{embed_image, BoundingBox};
use crate::model::{
    Alignment, Block, Document, Paragraph, ParagraphStyle, Table, TableBorders, TableCell,
    TableRow, TextRun, TextStyle,
};

const NAME_COLOR: &str = "2C3E50";
const DETAILS_COLOR: &str = "555555";

/// Column split of the letterhead, in percent.
const INFO_WIDTH: f32 = 70.0;
const LOGO_WIDTH: f32 = 30.0;

/// Spacing under the rule, in twentieths of a point.
const RULE_SPACE_AFTER: u32 = 400;

/// Builds the header region repeated on every page.
///
/// The logo, when present, is decoded and registered in `document`.
pub fn compose_header(
    branding: &BrandingConfig,
    logo_box: BoundingBox,
    document: &mut Document,
) -> Result<Vec<Block>> {
    let info = TableCell::with_content(vec![identity_paragraph(branding)]).with_width(INFO_WIDTH);

    let mut logo_paragraph = Paragraph::with_style(ParagraphStyle::new().aligned(Alignment::Right));
    if let Some(ref bytes) = branding.logo {
        logo_paragraph.push_image(embed_image(document, "logo", bytes, logo_box)?);
    }
    let logo = TableCell::with_content(vec![logo_paragraph]).with_width(LOGO_WIDTH);

    let layout = Table::with_rows(vec![TableRow {
        cells: vec![info, logo],
        is_header: false,
    }])
    .with_borders(TableBorders::none());

    let mut rule_style = ParagraphStyle::new().spaced(None, Some(RULE_SPACE_AFTER));
    rule_style.bottom_rule = true;

    Ok(vec![
        Block::Table(layout),
        Block::Paragraph(Paragraph::with_style(rule_style)),
    ])
}

/// Name, tagline and contact details stacked in one paragraph.
fn identity_paragraph(branding: &BrandingConfig) -> Paragraph {
    let mut paragraph = Paragraph::new();
    paragraph.push_text(TextRun::with_style(
        &branding.name,
        TextStyle::bold().with_size(14.0).with_color(NAME_COLOR),
    ));
    paragraph.push_line_break();
    paragraph.push_text(TextRun::with_style(
        &branding.tagline,
        TextStyle::italic().with_size(11.0),
    ));
    paragraph.push_line_break();
    paragraph.push_text(TextRun::with_style(
        format!("{} | {}", branding.address, branding.contact),
        TextStyle::new().with_size(9.0).with_color(DETAILS_COLOR),
    ));
    paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::InlineContent;

    fn branding() -> BrandingConfig {
        BrandingConfig {
            name: "Atelier Dupont".to_string(),
            address: "12 rue des Lilas".to_string(),
            contact: "01 23 45 67 89".to_string(),
            tagline: "Structure & Rénovation".to_string(),
            logo: None,
        }
    }

    #[test]
    fn test_header_without_logo() {
        let mut document = Document::new();
        let blocks = compose_header(&branding(), BoundingBox::new(100, 100), &mut document)
            .expect("header");
        assert_eq!(blocks.len(), 2);
        assert!(document.resources.is_empty());

        let layout = blocks[0].as_table().expect("layout table");
        assert_eq!(layout.borders, TableBorders::none());
        assert_eq!(layout.rows[0].cells.len(), 2);
        assert_eq!(layout.rows[0].cells[0].width_percent, Some(70.0));

        let identity = &layout.rows[0].cells[0].content[0];
        let runs: Vec<&TextRun> = identity.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "Atelier Dupont");
        assert!(runs[0].style.bold);
        assert!(runs[1].style.italic);
        assert_eq!(runs[2].text, "12 rue des Lilas | 01 23 45 67 89");

        let logo_cell = &layout.rows[0].cells[1].content[0];
        assert!(logo_cell.is_empty());

        let rule = blocks[1].as_paragraph().expect("rule");
        assert!(rule.style.bottom_rule);
    }

    #[test]
    fn test_header_rejects_corrupt_logo() {
        let mut config = branding();
        config.logo = Some(vec![0x89, b'P', b'N', b'G', 0, 0, 0, 0]);
        let mut document = Document::new();
        let result = compose_header(&config, BoundingBox::new(100, 100), &mut document);
        assert!(matches!(result, Err(Error::ImageDecode { .. })));
    }

    #[test]
    fn test_header_logo_registered() {
        use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 100, Rgba([0, 0, 0, 255])));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode");

        let mut config = branding();
        config.logo = Some(bytes);
        let mut document = Document::new();
        let blocks = compose_header(&config, BoundingBox::new(100, 100), &mut document)
            .expect("header");

        assert_eq!(document.resources.len(), 1);
        let layout = blocks[0].as_table().expect("layout table");
        let logo = &layout.rows[0].cells[1].content[0];
        assert_eq!(logo.style.alignment, Alignment::Right);
        match &logo.content[0] {
            InlineContent::Image(reference) => {
                assert_eq!(reference.id, "image1.png");
                assert_eq!((reference.width, reference.height), (100, 50));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }
}
