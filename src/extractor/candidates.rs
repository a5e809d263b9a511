//! Candidate collection and filtering.

use crate::dom::{TextBlock, TextBlockSource};
use crate::options::Options;
use crate::text::{char_len, contains_arabic_script};

/// A text block that passed the length and script filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Stripped, not yet normalized text.
    pub text: String,
    /// Tag of the element the text came from.
    pub tag: String,
}

impl From<TextBlock> for Candidate {
    fn from(block: TextBlock) -> Self {
        Self {
            text: block.text,
            tag: block.tag,
        }
    }
}

/// Returns true if `text` is long enough and contains Arabic-block characters.
///
/// The length check runs first since it is cheaper than the regex.
#[must_use]
pub fn is_candidate_text(text: &str, options: &Options) -> bool {
    char_len(text) > options.min_block_chars && contains_arabic_script(text)
}

/// Outcome of scanning a source: how many blocks there were and which survived.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// Number of blocks the source produced before filtering.
    pub blocks_seen: usize,
    /// Surviving candidates in source order.
    pub candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// True if no block survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of surviving candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Collect candidate blocks from `source`.
pub fn collect_candidates<S>(source: &S, options: &Options) -> CandidateSet
where
    S: TextBlockSource + ?Sized,
{
    let blocks = source.text_blocks(options);
    let blocks_seen = blocks.len();

    let candidates: Vec<Candidate> = blocks
        .into_iter()
        .filter(|b| is_candidate_text(&b.text, options))
        .map(Candidate::from)
        .collect();

    tracing::debug!(
        blocks = blocks_seen,
        candidates = candidates.len(),
        "filtered text blocks"
    );

    CandidateSet {
        blocks_seen,
        candidates,
    }
}
