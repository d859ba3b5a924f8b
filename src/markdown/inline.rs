//! Bold span splitting.

use crate::model::{TextRun, TextStyle};

/// Two-character marker toggling bold formatting.
pub const BOLD_DELIMITER: &str = "**";

/// Splits a line on the bold delimiter.
///
/// Odd-indexed segments are bold. Empty segments are kept as empty runs,
/// and unpaired delimiters are not repaired: the trailing segment's weight
/// follows its index parity.
pub fn split_bold(text: &str) -> Vec<TextRun> {
    let runs: Vec<TextRun> = text
        .split(BOLD_DELIMITER)
        .enumerate()
        .map(|(index, part)| {
            let style = TextStyle {
                bold: index % 2 == 1,
                ..Default::default()
            };
            TextRun::with_style(part, style)
        })
        .collect();

    // n segments means n - 1 delimiters
    if runs.len() % 2 == 0 {
        log::warn!("Unpaired bold delimiter in line: {:?}", text);
    }

    runs
}
