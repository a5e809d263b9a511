//! Compiled regex patterns used by the extractor and the speech chunker.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Script Detection
// =============================================================================

/// Matches any character in the Arabic Unicode block (U+0600..=U+06FF).
///
/// Urdu is written in this block, so a match is the proxy for "Urdu text present".
pub static ARABIC_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0600}-\x{06FF}]").expect("ARABIC_SCRIPT regex"));

// =============================================================================
// Whitespace
// =============================================================================

/// Matches one or more consecutive whitespace characters (Unicode-aware).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

// =============================================================================
// Speech Chunking
// =============================================================================

/// Matches sentence and clause punctuation after which speech may pause.
///
/// Covers Latin punctuation plus the Urdu full stop (۔), Arabic comma (،),
/// Arabic semicolon (؛) and Arabic question mark (؟).
pub static SPEECH_PAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.,;:!?\x{06D4}\x{060C}\x{061B}\x{061F}\n]").expect("SPEECH_PAUSE regex")
});
