//! # urdu-verse
//!
//! Finds a block of Urdu-script text on a web page, the likely poem, and
//! hands it on for display and speech synthesis.
//!
//! ## Quick Start
//!
//! ```rust
//! use urdu_verse::extract;
//!
//! let html = r#"<html><body>
//!   <nav><a href="/">Home</a></nav>
//!   <p>ہزاروں خواہشیں ایسی کہ ہر خواہش پہ دم نکلے</p>
//! </body></html>"#;
//!
//! let extraction = extract(html);
//! assert_eq!(
//!     extraction.text.as_deref(),
//!     Some("ہزاروں خواہشیں ایسی کہ ہر خواہش پہ دم نکلے")
//! );
//! ```
//!
//! ## How it works
//!
//! - **Candidates**: the text of every `p`, `div`, `span` and `blockquote`
//! - **Filtering**: longer than 20 characters and containing U+0600..=U+06FF
//! - **Selection**: one survivor, uniformly at random from a caller-supplied `Rng`
//! - **Normalization**: whitespace runs collapsed to single spaces, then trimmed
//!
//! The random pick is intentional. Pass a seeded generator to
//! [`extract_with_options`] for repeatable results.

mod error;
mod options;
mod patterns;

/// Text-block sources: the `(tag, text)` abstraction and its HTML implementation.
pub mod dom;

/// Candidate filtering and random selection.
pub mod extractor;

/// Script-range checks and whitespace normalization.
pub mod text;

/// Character decoding of fetched pages.
pub mod encoding;

/// Blocking page retrieval.
pub mod fetch;

/// Speech synthesis.
pub mod speech;

/// HTML rendering of a selected poem.
pub mod render;

/// `tracing` subscriber setup for the binaries.
pub mod logging;

use rand::Rng;

// Public API - re-exports
pub use dom::{HtmlDocument, TextBlock, TextBlockSource};
pub use error::{Error, ExtractError, Result, NO_SCRIPT_TEXT};
pub use extractor::{Extraction, Extractor};
pub use fetch::{FetchError, PageFetcher};
pub use options::{FetchOptions, Options, SpeechOptions, DEFAULT_BLOCK_TAGS, DEFAULT_USER_AGENT};
pub use speech::{GoogleTts, SpeechError, SpeechSynthesizer};

/// Extracts one Urdu block from an HTML string with default options.
///
/// Uses the thread-local random source; see [`extract_with_options`] to
/// supply your own.
#[must_use]
pub fn extract(html: &str) -> Extraction {
    extract_with_options(html, &Options::default(), &mut rand::thread_rng())
}

/// Extracts one Urdu block from an HTML string with custom options and random source.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use urdu_verse::{extract_with_options, Options};
///
/// let html = "<div>Home About Contact</div>";
/// let options = Options {
///     min_block_chars: 10,
///     ..Options::default()
/// };
/// let extraction = extract_with_options(html, &options, &mut StdRng::seed_from_u64(1));
/// assert_eq!(extraction.diagnostic.as_deref(), Some("no script-matching text found"));
/// ```
pub fn extract_with_options<R>(html: &str, options: &Options, rng: &mut R) -> Extraction
where
    R: Rng + ?Sized,
{
    let doc = HtmlDocument::parse(html);
    Extractor::new(options.clone()).extract(&doc, rng)
}

/// Extracts one Urdu block from raw page bytes.
///
/// The bytes are decoded as UTF-8 (invalid sequences replaced) before
/// parsing, the same way fetched pages are.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> Extraction {
    let html_str = encoding::decode_html(html, encoding::DecodePolicy::ForceUtf8);
    extract(&html_str)
}

/// Fetches `url` and selects one Urdu block from it.
///
/// Unlike [`PageFetcher::fetch_and_extract`], a page without usable text is
/// an [`Error::Extract`] here, so the whole crawl can be handled with `?`.
pub fn crawl_poem<R>(
    fetcher: &PageFetcher,
    extractor: &Extractor,
    url: &str,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    let extraction = fetcher.fetch_and_extract(url, extractor, rng)?;
    Ok(extraction.into_result()?)
}

/// Synthesizes `poem` and writes the audio to `path`.
///
/// Synthesis failures are reported on their own; they never affect an
/// extraction that already succeeded.
pub fn recite<S>(synthesizer: &S, poem: &str, path: &std::path::Path) -> Result<()>
where
    S: SpeechSynthesizer + ?Sized,
{
    let audio = synthesizer.synthesize(poem)?;
    speech::save_audio(path, &audio)?;
    Ok(())
}
