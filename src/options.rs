//! Configuration options for extraction, fetching and speech.
//!
//! Each struct has public fields and a `Default` impl carrying the
//! thresholds the heuristic was tuned with.

use std::time::Duration;

use crate::encoding::DecodePolicy;

/// Desktop Chrome user agent sent with page requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Tags whose text content is considered as a candidate block.
pub const DEFAULT_BLOCK_TAGS: [&str; 4] = ["p", "div", "span", "blockquote"];

/// Configuration options for the extractor.
///
/// # Example
///
/// ```rust
/// use urdu_verse::Options;
///
/// let options = Options {
///     min_block_chars: 40,
///     ..Options::default()
/// };
/// assert_eq!(options.block_tags.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Blocks must be strictly longer than this many characters.
    ///
    /// Measured on the stripped text before whitespace normalization.
    /// Keeps navigation menus and short labels out of the candidate set.
    ///
    /// Default: `20`
    pub min_block_chars: usize,

    /// Lowercase tag names scanned for candidate blocks.
    ///
    /// Default: `["p", "div", "span", "blockquote"]`
    pub block_tags: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_block_chars: 20,
            block_tags: DEFAULT_BLOCK_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Options {
    /// CSS selector matching every configured block tag.
    #[must_use]
    pub fn block_selector(&self) -> String {
        self.block_tags.join(", ")
    }

    /// Returns true if `tag` is one of the configured block tags.
    #[must_use]
    pub fn is_block_tag(&self, tag: &str) -> bool {
        self.block_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Configuration for the page fetcher.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// `User-Agent` header value.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Whole-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// How response bytes are turned into text.
    ///
    /// Default: [`DecodePolicy::ForceUtf8`]
    pub decode: DecodePolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            decode: DecodePolicy::ForceUtf8,
        }
    }
}

/// Configuration for the speech synthesizer.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    /// Language code sent to the TTS service.
    ///
    /// Default: `"ur"`
    pub lang: String,

    /// Read more slowly.
    ///
    /// Default: `false`
    pub slow: bool,

    /// Top-level domain of the TTS host (`translate.google.<tld>`).
    ///
    /// Default: `"com"`
    pub tld: String,

    /// Maximum characters sent per TTS request.
    ///
    /// Default: `100`
    pub max_chunk_chars: usize,

    /// Per-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            lang: "ur".to_string(),
            slow: false,
            tld: "com".to_string(),
            max_chunk_chars: 100,
            timeout: Duration::from_secs(10),
        }
    }
}
