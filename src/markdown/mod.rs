//! Markdown transcoding into document blocks.
//!
//! Supports the dialect AI reports are written in: `#`/`##`/`###`
//! headings, `-`/`*` bullets, `**bold**` spans and pipe tables. Everything
//! else is kept as plain paragraph text.

mod inline;
mod line;
mod table;
mod transcoder;

pub use inline::{split_bold, BOLD_DELIMITER};
pub use line::LineKind;
pub use table::{build_table, is_separator_row, split_cells, HEADER_SHADING};
pub use transcoder::{transcode, Transcoder};
