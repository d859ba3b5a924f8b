//! DOCX (Office Open XML) package writer.
//!
//! A DOCX file is a ZIP container of XML parts:
//! - `[Content_Types].xml` and `_rels/.rels` at the package root
//! - `word/document.xml` with its relationships
//! - `word/header1.xml` when the document carries a page header
//! - `word/styles.xml`, `word/numbering.xml`
//! - `word/media/*` holding embedded images

mod body;
mod parts;
mod xml;

pub use body::{CONTENT_WIDTH_TWIPS, PART_NAMESPACES};
pub use parts::paths;
pub use xml::xml_safe;

use crate::error::Result;
use crate::model::{Block, Document, Paragraph};
use body::{DrawingIds, PartWriter};
use parts::{rel_types, Relationships};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A4 portrait, in twips.
const PAGE_WIDTH: &str = "11906";
const PAGE_HEIGHT: &str = "16838";
const PAGE_MARGIN: &str = "1440";
const HEADER_DISTANCE: &str = "708";

/// Serializes `document` into DOCX bytes.
///
/// Fails with [`Error::Serialization`](crate::Error::Serialization) on a
/// table without rows or a row without cells, and with
/// [`Error::ResourceNotFound`](crate::Error::ResourceNotFound) when an
/// image refers to an unregistered resource.
pub fn write_docx(document: &Document) -> Result<Vec<u8>> {
    let mut drawing_ids = DrawingIds::default();
    let has_header = !document.header.is_empty();

    let header = if has_header {
        Some(header_part(document, &mut drawing_ids)?)
    } else {
        None
    };

    let mut doc_rels = Relationships::new();
    doc_rels.add(rel_types::STYLES, "styles.xml");
    doc_rels.add(rel_types::NUMBERING, "numbering.xml");
    let header_rel = if has_header {
        Some(doc_rels.add(rel_types::HEADER, "header1.xml"))
    } else {
        None
    };
    let main = main_part(document, doc_rels, header_rel.as_deref(), &mut drawing_ids)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut put = |name: &str, data: &[u8]| -> Result<()> {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
        Ok(())
    };

    put(paths::CONTENT_TYPES, &parts::content_types(has_header)?)?;
    put(paths::ROOT_RELS, &parts::root_relationships().to_xml()?)?;
    put(paths::CORE_PROPS, &parts::core_properties(&document.metadata)?)?;
    put(paths::APP_PROPS, &parts::app_properties()?)?;
    put(paths::DOCUMENT, &main.0)?;
    put(paths::DOCUMENT_RELS, &main.1.to_xml()?)?;
    put(paths::STYLES, parts::STYLES_XML.as_bytes())?;
    put(paths::NUMBERING, parts::NUMBERING_XML.as_bytes())?;
    if let Some((xml, rels)) = header {
        put(paths::HEADER, &xml)?;
        if !rels.is_empty() {
            put(paths::HEADER_RELS, &rels.to_xml()?)?;
        }
    }
    for (name, resource) in &document.resources {
        put(&format!("{}{}", paths::MEDIA_DIR, name), &resource.data)?;
    }

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();
    log::debug!(
        "Packed DOCX: {} blocks, {} resources, {} bytes",
        document.content.len(),
        document.resources.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn main_part(
    document: &Document,
    rels: Relationships,
    header_rel: Option<&str>,
    drawing_ids: &mut DrawingIds,
) -> Result<(Vec<u8>, Relationships)> {
    let mut writer = PartWriter::new(&document.resources, drawing_ids)?;
    writer.rels = rels;
    writer.sink().open("w:document", &PART_NAMESPACES)?;
    writer.sink().open("w:body", &[])?;

    writer.write_blocks(&document.content)?;
    // A body may not end on a table
    if matches!(document.content.last(), Some(Block::Table(_)) | None) {
        writer.write_blocks(&[Block::Paragraph(Paragraph::new())])?;
    }

    let sink = writer.sink();
    sink.open("w:sectPr", &[])?;
    if let Some(id) = header_rel {
        sink.empty("w:headerReference", &[("w:type", "default"), ("r:id", id)])?;
    }
    sink.empty("w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
    sink.empty(
        "w:pgMar",
        &[
            ("w:top", PAGE_MARGIN),
            ("w:right", PAGE_MARGIN),
            ("w:bottom", PAGE_MARGIN),
            ("w:left", PAGE_MARGIN),
            ("w:header", HEADER_DISTANCE),
            ("w:footer", HEADER_DISTANCE),
            ("w:gutter", "0"),
        ],
    )?;
    sink.close("w:sectPr")?;
    sink.close("w:body")?;
    sink.close("w:document")?;
    Ok(writer.finish())
}

fn header_part(
    document: &Document,
    drawing_ids: &mut DrawingIds,
) -> Result<(Vec<u8>, Relationships)> {
    let mut writer = PartWriter::new(&document.resources, drawing_ids)?;
    writer.sink().open("w:hdr", &PART_NAMESPACES)?;
    writer.write_blocks(&document.header)?;
    if matches!(document.header.last(), Some(Block::Table(_))) {
        writer.write_blocks(&[Block::Paragraph(Paragraph::new())])?;
    }
    writer.sink().close("w:hdr")?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::markdown::transcode;
    use crate::model::{ImageRef, Resource};
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> Option<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).ok()?;
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        Some(xml)
    }

    #[test]
    fn test_minimal_package() {
        let mut document = Document::new();
        document.content = transcode("# Rapport\nCorps");
        let bytes = write_docx(&document).unwrap();

        let xml = read_part(&bytes, paths::DOCUMENT).unwrap();
        assert!(xml.contains(">Rapport</w:t>"));
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
        assert!(!xml.contains("w:headerReference"));
        assert!(read_part(&bytes, paths::STYLES).is_some());
        assert!(read_part(&bytes, paths::NUMBERING).is_some());
        assert!(read_part(&bytes, paths::HEADER).is_none());

        let types = read_part(&bytes, paths::CONTENT_TYPES).unwrap();
        assert!(!types.contains("/word/header1.xml"));
    }

    #[test]
    fn test_header_part_and_media() {
        let mut document = Document::new();
        let id = document.add_resource(Resource::image(vec![0u8; 4], "image/png", 1, 1));
        let mut logo = Paragraph::new();
        logo.push_image(ImageRef::new(id.clone(), 50, 50));
        document.header = vec![Block::Paragraph(logo)];
        document.content = transcode("Texte");

        let bytes = write_docx(&document).unwrap();
        let main = read_part(&bytes, paths::DOCUMENT).unwrap();
        assert!(main.contains("<w:headerReference w:type=\"default\" r:id=\"rId3\"/>"));

        let header = read_part(&bytes, paths::HEADER).unwrap();
        assert!(header.contains("<w:hdr "));
        assert!(header.contains("r:embed=\"rId1\""));
        let header_rels = read_part(&bytes, paths::HEADER_RELS).unwrap();
        assert!(header_rels.contains("media/image1.png"));

        assert!(read_part(&bytes, &format!("{}{}", paths::MEDIA_DIR, id)).is_some());
    }

    #[test]
    fn test_trailing_table_gets_paragraph() {
        let mut document = Document::new();
        document.content = transcode("| A |");
        let bytes = write_docx(&document).unwrap();
        let xml = read_part(&bytes, paths::DOCUMENT).unwrap();
        assert!(xml.contains("</w:tbl><w:p></w:p><w:sectPr>"));
    }

    #[test]
    fn test_invalid_table_is_rejected() {
        let mut document = Document::new();
        document.content = transcode("|");
        assert!(matches!(
            write_docx(&document),
            Err(Error::Serialization(_))
        ));
    }
}
