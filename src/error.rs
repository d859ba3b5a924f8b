//! Error types for plan2docx library.

use std::io;
use thiserror::Error;

/// Result type alias for plan2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plan2docx library.
///
/// Malformed Markdown never produces an error; the transcoder degrades to
/// plain text instead. Every variant below aborts the whole build.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The Markdown body is empty, so there is nothing to report.
    #[error("Report body is empty")]
    EmptyBody,

    /// An image (logo or reference plan) could not be decoded.
    #[error("Failed to decode {image} image: {message}")]
    ImageDecode { image: String, message: String },

    /// The composed node sequence cannot be packed (e.g. a row with no cells).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource (image, etc.) not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// ZIP archive writing error.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// XML writing error.
    #[error("XML writing error: {0}")]
    XmlWrite(String),

    /// Branding configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Builds an [`Error::ImageDecode`] for the named image.
    pub(crate) fn image_decode(image: impl Into<String>, message: impl ToString) -> Self {
        Error::ImageDecode {
            image: image.into(),
            message: message.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlWrite(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
