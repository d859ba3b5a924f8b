//! Package-level parts: relationships, content types, properties, styles.

use super::xml::XmlSink;
use crate::error::Result;
use crate::model::Metadata;

/// Part paths inside the DOCX container.
pub mod paths {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const CORE_PROPS: &str = "docProps/core.xml";
    pub const APP_PROPS: &str = "docProps/app.xml";
    pub const DOCUMENT: &str = "word/document.xml";
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
    pub const STYLES: &str = "word/styles.xml";
    pub const NUMBERING: &str = "word/numbering.xml";
    pub const HEADER: &str = "word/header1.xml";
    pub const HEADER_RELS: &str = "word/_rels/header1.xml.rels";
    pub const MEDIA_DIR: &str = "word/media/";
}

/// Relationship type URIs.
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const HEADER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const MAIN_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const STYLES_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const NUMBERING_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
const HEADER_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
const CORE_TYPE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const APP_TYPE: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Image extensions registered as default content types.
const IMAGE_DEFAULTS: [(&str, &str); 4] = [
    ("png", "image/png"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
];

/// One relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
}

/// Ordered relationship list of one part, handing out `rIdN` identifiers.
#[derive(Debug, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relationship and returns its id.
    ///
    /// A target already present with the same type reuses its id.
    pub fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        let target = target.into();
        if let Some(existing) = self
            .entries
            .iter()
            .find(|r| r.rel_type == rel_type && r.target == target)
        {
            return existing.id.clone();
        }
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type,
            target,
        });
        id
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut sink = XmlSink::new()?;
        sink.open("Relationships", &[("xmlns", RELS_NS)])?;
        for rel in &self.entries {
            sink.empty(
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }
        sink.close("Relationships")?;
        Ok(sink.into_bytes())
    }
}

/// Package relationships pointing at the main document and properties.
pub fn root_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(rel_types::OFFICE_DOCUMENT, paths::DOCUMENT);
    rels.add(rel_types::CORE_PROPERTIES, paths::CORE_PROPS);
    rels.add(rel_types::EXTENDED_PROPERTIES, paths::APP_PROPS);
    rels
}

/// `[Content_Types].xml`.
pub fn content_types(has_header: bool) -> Result<Vec<u8>> {
    let mut sink = XmlSink::new()?;
    sink.open("Types", &[("xmlns", TYPES_NS)])?;
    sink.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    sink.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    for (extension, mime) in IMAGE_DEFAULTS {
        sink.empty("Default", &[("Extension", extension), ("ContentType", mime)])?;
    }

    let mut overrides = vec![
        (paths::DOCUMENT, MAIN_TYPE),
        (paths::STYLES, STYLES_TYPE),
        (paths::NUMBERING, NUMBERING_TYPE),
        (paths::CORE_PROPS, CORE_TYPE),
        (paths::APP_PROPS, APP_TYPE),
    ];
    if has_header {
        overrides.push((paths::HEADER, HEADER_TYPE));
    }
    for (part, content_type) in overrides {
        let part_name = format!("/{}", part);
        sink.empty(
            "Override",
            &[("PartName", part_name.as_str()), ("ContentType", content_type)],
        )?;
    }

    sink.close("Types")?;
    Ok(sink.into_bytes())
}

/// `docProps/core.xml`.
pub fn core_properties(metadata: &Metadata) -> Result<Vec<u8>> {
    let mut sink = XmlSink::new()?;
    sink.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    if let Some(ref title) = metadata.title {
        sink.text_element("dc:title", &[], title)?;
    }
    if let Some(ref author) = metadata.author {
        sink.text_element("dc:creator", &[], author)?;
    }
    if let Some(ref created) = metadata.created {
        sink.text_element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], created)?;
        sink.text_element("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], created)?;
    }
    sink.close("cp:coreProperties")?;
    Ok(sink.into_bytes())
}

/// `docProps/app.xml`.
pub fn app_properties() -> Result<Vec<u8>> {
    let mut sink = XmlSink::new()?;
    sink.open(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    sink.text_element("Application", &[], concat!("plan2docx ", env!("CARGO_PKG_VERSION")))?;
    sink.close("Properties")?;
    Ok(sink.into_bytes())
}

/// Style sheet: Normal, Title, Heading1-3, ListParagraph and the default table style.
pub const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="fr-FR"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="120" w:line="264" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:rPr><w:b/><w:color w:val="2C3E50"/><w:sz w:val="48"/><w:szCs w:val="48"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:outlineLvl w:val="0"/></w:pPr>
    <w:rPr><w:b/><w:color w:val="2C3E50"/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:outlineLvl w:val="1"/></w:pPr>
    <w:rPr><w:b/><w:color w:val="34495E"/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading3">
    <w:name w:val="heading 3"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:outlineLvl w:val="2"/></w:pPr>
    <w:rPr><w:b/><w:color w:val="34495E"/><w:sz w:val="24"/><w:szCs w:val="24"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph">
    <w:name w:val="List Paragraph"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:ind w:left="720"/><w:contextualSpacing/></w:pPr>
  </w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:uiPriority w:val="99"/>
    <w:semiHidden/>
    <w:tblPr>
      <w:tblInd w:w="0" w:type="dxa"/>
      <w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar>
    </w:tblPr>
  </w:style>
</w:styles>
"#;

/// Numbering definitions; `numId` 1 is the bullet list.
pub const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="hybridMultilevel"/>
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="◦"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr></w:lvl>
    <w:lvl w:ilvl="2"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="▪"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="2160" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>
"#;

/// Number of bullet levels defined in [`NUMBERING_XML`].
pub const BULLET_LEVELS: u8 = 3;

/// `numId` of the bullet list.
pub const BULLET_NUM_ID: &str = "1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_ids_sequential_and_deduplicated() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.add(rel_types::IMAGE, "media/image1.png"), "rId2");
        assert_eq!(rels.add(rel_types::IMAGE, "media/image1.png"), "rId2");
        assert_eq!(rels.add(rel_types::IMAGE, "media/image2.png"), "rId3");
    }

    #[test]
    fn test_content_types_header_override() {
        let with = String::from_utf8(content_types(true).unwrap()).unwrap();
        let without = String::from_utf8(content_types(false).unwrap()).unwrap();
        assert!(with.contains("/word/header1.xml"));
        assert!(!without.contains("/word/header1.xml"));
        assert!(with.contains("Extension=\"png\""));
    }

    #[test]
    fn test_core_properties() {
        let metadata = Metadata {
            title: Some("Rapport".to_string()),
            author: Some("Atelier & Co".to_string()),
            created: Some("2024-03-05T10:00:00Z".to_string()),
        };
        let xml = String::from_utf8(core_properties(&metadata).unwrap()).unwrap();
        assert!(xml.contains("<dc:title>Rapport</dc:title>"));
        assert!(xml.contains("<dc:creator>Atelier &amp; Co</dc:creator>"));
        assert!(xml.contains("2024-03-05T10:00:00Z"));
    }
}
