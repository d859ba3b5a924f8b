//! Async API for non-blocking report generation.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! plan2docx = { version = "0.1", features = ["async"] }
//! ```

use crate::config::BrandingConfig;
use crate::error::{Error, Result};
use crate::report::ReportOptions;
use crate::request::ReportRequest;
use std::path::Path;
use tokio::fs;

/// Asynchronously builds a report and returns the DOCX bytes.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> plan2docx::Result<()> {
/// use plan2docx::{BrandingConfig, ReportOptions, ReportRequest};
///
/// let request = ReportRequest::new("## Synthèse\nRAS");
/// let bytes = plan2docx::async_api::build_report(
///     request,
///     BrandingConfig::default(),
///     ReportOptions::default(),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn build_report(
    request: ReportRequest,
    branding: BrandingConfig,
    options: ReportOptions,
) -> Result<Vec<u8>> {
    // Decoding and packing are CPU-bound
    tokio::task::spawn_blocking(move || {
        crate::build_report_with_options(&request, &branding, &options)
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Asynchronously builds a report and writes it to `path`.
pub async fn write_report(
    path: impl AsRef<Path>,
    request: ReportRequest,
    branding: BrandingConfig,
    options: ReportOptions,
) -> Result<()> {
    let bytes = build_report(request, branding, options).await?;
    fs::write(path, bytes).await?;
    Ok(())
}
