//! Character decoding of fetched pages.
//!
//! The script-range check only works on correctly decoded text, so every
//! page is turned into UTF-8 here before parsing. By default the bytes are
//! read as UTF-8 regardless of what the page declares; [`DecodePolicy::Sniff`]
//! honors `<meta charset>` declarations instead.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// How raw page bytes are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Always decode as UTF-8, replacing invalid sequences with U+FFFD.
    #[default]
    ForceUtf8,
    /// Use the `<meta>` charset declaration, falling back to UTF-8.
    Sniff,
}

/// Detect character encoding from HTML bytes.
///
/// Looks at `<meta charset>` first, then the `http-equiv` form, and
/// defaults to UTF-8. Only the first 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .into_iter()
        .filter_map(|re| declared_charset(re, &head_str))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode page bytes to a UTF-8 string under `policy`.
///
/// Never fails: undecodable sequences become the replacement character.
///
/// # Examples
///
/// ```
/// use urdu_verse::encoding::{decode_html, DecodePolicy};
///
/// let page = "<p>غالب</p>".as_bytes();
/// assert_eq!(decode_html(page, DecodePolicy::ForceUtf8), "<p>غالب</p>");
/// ```
#[must_use]
pub fn decode_html(html: &[u8], policy: DecodePolicy) -> String {
    let encoding = match policy {
        DecodePolicy::ForceUtf8 => UTF_8,
        DecodePolicy::Sniff => detect_encoding(html),
    };

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
