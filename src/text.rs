//! Text predicates and normalization shared by the extractor.

use crate::patterns::{ARABIC_SCRIPT, WHITESPACE_RUN};

/// Returns true if `text` contains at least one Arabic-block character.
#[inline]
#[must_use]
pub fn contains_arabic_script(text: &str) -> bool {
    ARABIC_SCRIPT.is_match(text)
}

/// Length of `text` in characters (Unicode scalar values), not bytes.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Collapses every whitespace run into a single space and trims both ends.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
///
/// # Examples
///
/// ```
/// use urdu_verse::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  دل \n\t ناداں  "), "دل ناداں");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
