//! Poem extraction.
//!
//! A single linear pass over a text-block source:
//! candidate collection, script/length filtering, random selection and
//! whitespace normalization.
//!
//! # Module Structure
//!
//! - `candidates`: Block filtering by length and script range
//! - `selection`: Uniform random choice over the surviving candidates
//!
//! # Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use urdu_verse::dom::HtmlDocument;
//! use urdu_verse::extractor::Extractor;
//!
//! let doc = HtmlDocument::parse("<p>دل ناداں تجھے ہوا کیا ہے آخر اس درد کی دوا کیا ہے</p>");
//! let extraction = Extractor::default().extract(&doc, &mut StdRng::seed_from_u64(7));
//! assert!(extraction.text.is_some());
//! ```

pub mod candidates;
pub mod selection;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dom::TextBlockSource;
use crate::error::ExtractError;
use crate::options::Options;
use crate::text::normalize_whitespace;

pub use candidates::{collect_candidates, is_candidate_text, Candidate, CandidateSet};
pub use selection::choose_candidate;

/// Result of one extraction call: either text or a diagnostic.
///
/// Exactly one of `text` and `diagnostic` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Selected poem text, whitespace-normalized.
    pub text: Option<String>,

    /// User-facing message explaining why no text was returned.
    pub diagnostic: Option<String>,

    /// How many candidates the selection was made from.
    #[serde(default)]
    pub candidates: usize,

    /// Why nothing was returned; not part of the JSON output.
    #[serde(skip)]
    pub error: Option<ExtractError>,
}

impl Extraction {
    fn found(text: String, candidates: usize) -> Self {
        Self {
            text: Some(text),
            diagnostic: None,
            candidates,
            error: None,
        }
    }

    fn missing(err: ExtractError) -> Self {
        Self {
            text: None,
            diagnostic: Some(err.to_string()),
            candidates: 0,
            error: Some(err),
        }
    }

    /// Converts to a `Result`, keeping the failure kind.
    ///
    /// An extraction rebuilt from JSON has no kind and reports
    /// `ExtractError::NoCandidates`.
    pub fn into_result(self) -> Result<String, ExtractError> {
        let error = self.error.unwrap_or(ExtractError::NoCandidates);
        self.text.ok_or(error)
    }
}

/// Finds one Urdu-script block in a document.
///
/// Holds only configuration; extraction itself borrows the document and
/// the random source for the duration of one call.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: Options,
}

impl Extractor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Every block that passes the filters, normalized, in document order.
    ///
    /// Useful for callers that want to choose for themselves.
    pub fn candidates<S>(&self, source: &S) -> Vec<String>
    where
        S: TextBlockSource + ?Sized,
    {
        collect_candidates(source, &self.options)
            .candidates
            .iter()
            .map(|c| normalize_whitespace(&c.text))
            .collect()
    }

    /// Select one candidate at random and normalize it.
    pub fn select<S, R>(&self, source: &S, rng: &mut R) -> Result<String, ExtractError>
    where
        S: TextBlockSource + ?Sized,
        R: Rng + ?Sized,
    {
        let set = collect_candidates(source, &self.options);
        if set.blocks_seen == 0 {
            return Err(ExtractError::EmptyDocument);
        }

        let chosen = choose_candidate(&set.candidates, rng).ok_or(ExtractError::NoCandidates)?;
        tracing::debug!(tag = %chosen.tag, chars = chosen.text.chars().count(), "selected candidate");

        Ok(normalize_whitespace(&chosen.text))
    }

    /// Run the extractor, reporting failure as a diagnostic rather than an error.
    pub fn extract<S, R>(&self, source: &S, rng: &mut R) -> Extraction
    where
        S: TextBlockSource + ?Sized,
        R: Rng + ?Sized,
    {
        let set = collect_candidates(source, &self.options);
        if set.blocks_seen == 0 {
            return Extraction::missing(ExtractError::EmptyDocument);
        }

        match choose_candidate(&set.candidates, rng) {
            Some(chosen) => {
                tracing::debug!(tag = %chosen.tag, of = set.len(), "selected candidate");
                Extraction::found(normalize_whitespace(&chosen.text), set.len())
            }
            None => Extraction::missing(ExtractError::NoCandidates),
        }
    }
}
