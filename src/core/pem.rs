// src/core/pem.rs
//! Line-ending detection and normalization for `PUBLIC KEY` PEM blocks
//!
//! Keys produced on another platform often arrive with a different
//! terminator or with stray whitespace around the block. These helpers
//! rewrap the block without touching its base64 body.

use crate::consts::{PUBLIC_KEY_BEGIN, PUBLIC_KEY_END};
use crate::enums::LineEnding;

/// Classify the terminator convention of a public key block.
///
/// Returns `None` when the header and footer disagree or either is missing.
pub fn detect_line_ending(pem: &str) -> Option<LineEnding> {
    [LineEnding::Unix, LineEnding::Windows]
        .into_iter()
        .find(|&eol| uses_line_ending(pem, eol))
}

fn uses_line_ending(pem: &str, eol: LineEnding) -> bool {
    let eol = eol.as_str();
    pem.strip_prefix(PUBLIC_KEY_BEGIN)
        .is_some_and(|rest| rest.starts_with(eol))
        && pem.contains(&format!("{PUBLIC_KEY_END}{eol}"))
}

/// Rewrap a public key block as `header eol body eol footer eol`.
///
/// The body is everything between the header line and the first
/// `eol footer eol` sequence. The caller must pass the block's real
/// convention: with the wrong one the slice boundaries are meaningless
/// and the result is garbage (though never a panic).
pub fn normalize(line_ending: LineEnding, pem: &str) -> String {
    let eol = line_ending.as_str();
    let start = PUBLIC_KEY_BEGIN.len() + eol.len();
    let end = pem
        .find(&format!("{eol}{PUBLIC_KEY_END}{eol}"))
        .unwrap_or(pem.len());

    let body = pem.get(start..end).unwrap_or_default();

    format!("{PUBLIC_KEY_BEGIN}{eol}{body}{eol}{PUBLIC_KEY_END}{eol}")
}

/// Detect, then normalize. `None` if the convention cannot be determined.
pub fn normalize_detected(pem: &str) -> Option<String> {
    detect_line_ending(pem).map(|eol| normalize(eol, pem))
}
