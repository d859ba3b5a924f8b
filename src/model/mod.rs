//! Document model (Intermediate Representation).
//!
//! This module defines the node sequence that the transcoder and the
//! composers emit and that the DOCX packer consumes.

mod document;
mod paragraph;
mod style;
mod table;

pub use document::*;
pub use paragraph::*;
pub use style::*;
pub use table::*;
