//! # plan2docx
//!
//! Turns an AI-generated Markdown analysis of a technical plan into a
//! letterheaded Word (DOCX) expert report.
//!
//! The pipeline has three stages:
//!
//! 1. The [`markdown`] transcoder converts the Markdown dialect AI models
//!    emit (headings, bullets, bold spans, pipe tables) into document blocks.
//! 2. The [`report`] composers add the company letterhead, the title, the
//!    context and request block and the analyzed plan image.
//! 3. The [`docx`] packer serializes the model into a WordprocessingML package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plan2docx::{build_report, BrandingConfig, ReportRequest};
//!
//! fn main() -> plan2docx::Result<()> {
//!     let markdown = std::fs::read_to_string("analyse.md")?;
//!     let request = ReportRequest::new(markdown)
//!         .with_context("Extension d'une maison individuelle")
//!         .with_prompt("Vérifier la conformité des cotes");
//!
//!     let branding = BrandingConfig::load("branding.json")?;
//!     let bytes = build_report(&request, &branding)?;
//!     std::fs::write("rapport.docx", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `async`: Async API with Tokio

pub mod config;
pub mod docx;
pub mod error;
pub mod markdown;
pub mod media;
pub mod model;
pub mod report;
pub mod request;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use config::{BrandingConfig, DEFAULT_CONFIG_FILE};
pub use docx::write_docx;
pub use error::{Error, Result};
pub use markdown::transcode;
pub use media::BoundingBox;
pub use model::{Block, Document};
pub use report::{
    build_document, report_filename, GeneratedReport, ReportBuilder, ReportLabels, ReportOptions,
};
pub use request::ReportRequest;

/// Builds a report with the default French layout and returns the DOCX bytes.
///
/// Fails with [`Error::EmptyBody`] when the Markdown body is blank and with
/// [`Error::ImageDecode`] when the logo or plan image cannot be decoded.
///
/// # Example
///
/// ```no_run
/// use plan2docx::{build_report, BrandingConfig, ReportRequest};
///
/// let bytes = build_report(&ReportRequest::new("# Synthèse"), &BrandingConfig::default())?;
/// assert!(bytes.starts_with(b"PK"));
/// # Ok::<(), plan2docx::Error>(())
/// ```
pub fn build_report(request: &ReportRequest, branding: &BrandingConfig) -> Result<Vec<u8>> {
    build_report_with_options(request, branding, &ReportOptions::default())
}

/// Builds a report with custom options and returns the DOCX bytes.
pub fn build_report_with_options(
    request: &ReportRequest,
    branding: &BrandingConfig,
    options: &ReportOptions,
) -> Result<Vec<u8>> {
    let document = build_document(request, branding, options)?;
    write_docx(&document)
}
