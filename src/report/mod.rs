//! Report assembly: letterhead, front matter and transcoded analysis.
//!
//! ```no_run
//! use plan2docx::{BrandingConfig, ReportBuilder, ReportRequest};
//!
//! let request = ReportRequest::new("## Synthèse\nRAS")
//!     .with_context("Maison individuelle");
//! let branding = BrandingConfig::load("branding.json")?;
//!
//! let report = ReportBuilder::new().build(&request, &branding)?;
//! report.write_to(report.filename())?;
//! # Ok::<(), plan2docx::Error>(())
//! ```

mod header;
mod options;
mod preamble;

pub use header::compose_header;
pub use options::{ReportLabels, ReportOptions, LOGO_BOX, PLAN_BOX};
pub use preamble::compose_preamble;

use crate::config::BrandingConfig;
use crate::docx::write_docx;
use crate::error::{Error, Result};
use crate::markdown::transcode;
use crate::model::{Document, Metadata};
use crate::request::ReportRequest;
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::path::Path;

/// Assembles the full document model for one report.
///
/// Header blocks go to the page header; the preamble is followed directly
/// by the transcoded Markdown body.
pub fn build_document(
    request: &ReportRequest,
    branding: &BrandingConfig,
    options: &ReportOptions,
) -> Result<Document> {
    if request.is_empty() {
        return Err(Error::EmptyBody);
    }

    let mut document = Document::new();
    document.metadata = Metadata {
        title: Some(options.labels.title.clone()),
        author: Some(branding.name.clone()),
        created: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    };

    document.header = compose_header(branding, options.logo_box, &mut document)?;
    let mut content = compose_preamble(request, options, &mut document)?;
    let preamble_len = content.len();
    content.extend(transcode(&request.markdown_body));
    document.content = content;

    log::debug!(
        "Assembled report: {} header blocks, {} preamble blocks, {} body blocks, {} images",
        document.header.len(),
        preamble_len,
        document.content.len() - preamble_len,
        document.resources.len()
    );
    Ok(document)
}

/// Suggested file name, `Rapport_Expertise_YYYY-MM-DD.docx`.
pub fn report_filename(date: NaiveDate) -> String {
    labeled_filename(&ReportLabels::default(), date)
}

fn labeled_filename(labels: &ReportLabels, date: NaiveDate) -> String {
    format!("{}_{}.docx", labels.file_stem, date.format("%Y-%m-%d"))
}

/// Builder for report generation.
///
/// # Example
///
/// ```no_run
/// use plan2docx::{BrandingConfig, ReportBuilder, ReportLabels, ReportRequest};
///
/// let bytes = ReportBuilder::new()
///     .with_labels(ReportLabels::english())
///     .build(&ReportRequest::new("# Findings"), &BrandingConfig::default())?
///     .to_docx()?;
/// # Ok::<(), plan2docx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}

impl ReportBuilder {
    /// Creates a builder with the default French layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all options.
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the fixed wording.
    pub fn with_labels(mut self, labels: ReportLabels) -> Self {
        self.options = self.options.with_labels(labels);
        self
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Builds the document model.
    pub fn build(
        &self,
        request: &ReportRequest,
        branding: &BrandingConfig,
    ) -> Result<GeneratedReport> {
        let document = build_document(request, branding, &self.options)?;
        Ok(GeneratedReport {
            document,
            labels: self.options.labels.clone(),
        })
    }
}

/// An assembled report ready for packing.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    document: Document,
    labels: ReportLabels,
}

impl GeneratedReport {
    /// Returns a reference to the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serializes the report to DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        write_docx(&self.document)
    }

    /// Serializes the report and writes it to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_docx()?;
        std::fs::write(path, &bytes)?;
        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Suggested file name for today's date.
    pub fn filename(&self) -> String {
        labeled_filename(&self.labels, Utc::now().date_naive())
    }

    /// Consumes self and returns the underlying document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn request() -> ReportRequest {
        ReportRequest::new("## Analyse\nRAS")
            .with_context("Villa R+1")
            .with_prompt("Vérifier les cotes")
    }

    #[test]
    fn test_empty_body_rejected() {
        let result = build_document(
            &ReportRequest::new("  \n\t"),
            &BrandingConfig::default(),
            &ReportOptions::default(),
        );
        assert!(matches!(result, Err(Error::EmptyBody)));
    }

    #[test]
    fn test_document_layout() {
        let document =
            build_document(&request(), &BrandingConfig::default(), &ReportOptions::default())
                .unwrap();

        assert_eq!(document.header.len(), 2);
        assert!(document.header[0].as_table().is_some());
        assert!(document.resources.is_empty());

        let texts: Vec<String> = document
            .content
            .iter()
            .filter_map(Block::as_paragraph)
            .map(|p| p.plain_text())
            .collect();
        assert_eq!(texts[0], "Rapport d'Analyse Technique");
        assert!(texts.iter().any(|t| t == "Analyse"));
        assert_eq!(texts.last().map(String::as_str), Some("RAS"));

        assert_eq!(document.metadata.author.as_deref(), Some("Nom de Votre Entreprise"));
        assert!(document.metadata.created.is_some());
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(report_filename(date), "Rapport_Expertise_2024-03-05.docx");
    }

    #[test]
    fn test_builder_labels() {
        let report = ReportBuilder::new()
            .with_labels(ReportLabels::english())
            .with_title("Structural Review")
            .build(&request(), &BrandingConfig::default())
            .unwrap();
        let first = report.document().content[0].as_paragraph().unwrap();
        assert_eq!(first.plain_text(), "Structural Review");
        assert!(report.filename().starts_with("Expert_Report_"));
        assert!(report.filename().ends_with(".docx"));
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        ReportBuilder::new()
            .build(&request(), &BrandingConfig::default())
            .unwrap()
            .write_to(&path)
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
