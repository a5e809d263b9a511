//! Text-block sources.
//!
//! The extractor never walks a markup tree itself. It consumes an ordered
//! sequence of `(tag, text)` pairs from anything implementing
//! [`TextBlockSource`]. [`HtmlDocument`] provides them from a `dom_query`
//! parse; a plain `Vec<TextBlock>` works for tests and other parsers.

pub use dom_query::{Document, NodeRef};
pub use tendril::StrTendril;

use crate::options::Options;

/// Elements whose text is code or markup, never prose.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// One block of text and the tag of the element it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// Lowercase tag name of the originating element.
    pub tag: String,
    /// Stripped text content of the element.
    pub text: String,
}

impl TextBlock {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// Anything that can list text blocks, in document order.
pub trait TextBlockSource {
    /// Returns every block whose tag is one of `options.block_tags`.
    ///
    /// Nested matches are all reported: a `<div>` and the `<p>` inside it are
    /// two blocks, the outer one containing the inner one's text.
    fn text_blocks(&self, options: &Options) -> Vec<TextBlock>;
}

impl TextBlockSource for [TextBlock] {
    fn text_blocks(&self, options: &Options) -> Vec<TextBlock> {
        self.iter()
            .filter(|b| options.is_block_tag(&b.tag))
            .cloned()
            .collect()
    }
}

impl TextBlockSource for Vec<TextBlock> {
    fn text_blocks(&self, options: &Options) -> Vec<TextBlock> {
        self.as_slice().text_blocks(options)
    }
}

/// A parsed HTML page.
///
/// Parsing is tolerant: malformed markup is repaired by html5ever rather
/// than rejected.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parse an already UTF-8 decoded HTML string.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }
}

impl TextBlockSource for HtmlDocument {
    fn text_blocks(&self, options: &Options) -> Vec<TextBlock> {
        if options.block_tags.is_empty() {
            return Vec::new();
        }

        let selector = options.block_selector();
        let selection = self.doc.select(&selector);

        selection
            .nodes()
            .iter()
            .filter_map(|node| {
                let tag = tag_name(node)?;
                Some(TextBlock {
                    tag,
                    text: spaced_text(node).trim().to_string(),
                })
            })
            .collect()
    }
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// All descendant text nodes of `node` joined with single spaces.
///
/// Unlike `Selection::text`, which concatenates text nodes directly, this
/// keeps `<br>`-separated verses and adjacent inline elements apart.
/// Comment nodes are skipped, and so is anything inside a
/// [`NON_CONTENT_TAGS`] element.
#[must_use]
pub fn spaced_text(node: &NodeRef) -> String {
    let pieces: Vec<StrTendril> = node
        .descendants()
        .into_iter()
        .filter(|n| n.is_text() && !inside_non_content(n, node))
        .map(|n| n.text())
        .collect();

    let mut out = String::with_capacity(pieces.iter().map(|p| p.len() + 1).sum());
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// True if `node` sits in a script-like element between itself and `root`.
fn inside_non_content(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == root.id {
            return false;
        }
        if parent.is_element() {
            if let Some(tag) = parent.node_name() {
                if NON_CONTENT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
                    return true;
                }
            }
        }
        current = parent.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_options() -> Options {
        Options::default()
    }

    #[test]
    fn test_blocks_in_document_order() {
        let doc = HtmlDocument::parse(
            "<body><p>first</p><blockquote>second</blockquote><span>third</span></body>",
        );
        let blocks = doc.text_blocks(&default_options());
        let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(blocks[1].tag, "blockquote");
    }

    #[test]
    fn test_nested_blocks_are_all_reported() {
        let doc = HtmlDocument::parse("<div><p>inner</p></div>");
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], TextBlock::new("div", "inner"));
        assert_eq!(blocks[1], TextBlock::new("p", "inner"));
    }

    #[test]
    fn test_text_nodes_joined_with_spaces() {
        let doc = HtmlDocument::parse("<p>دل<br>ناداں<b>تجھے</b>ہوا</p>");
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks[0].text, "دل ناداں تجھے ہوا");
    }

    #[test]
    fn test_text_is_stripped() {
        let doc = HtmlDocument::parse("<p>\n   hello  \n</p>");
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks[0].text, "hello");
    }

    #[test]
    fn test_comments_are_skipped() {
        let doc = HtmlDocument::parse("<p>a<!-- hidden -->b</p>");
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks[0].text, "a b");
    }

    #[test]
    fn test_script_and_style_text_is_skipped() {
        let doc = HtmlDocument::parse(
            "<div><style>.x{color:red}</style><p>دل ناداں</p><script>var t = 1;</script></div>",
        );
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks[0], TextBlock::new("div", "دل ناداں"));
        assert_eq!(blocks[1], TextBlock::new("p", "دل ناداں"));
    }

    #[test]
    fn test_nested_non_content_text_is_skipped() {
        let doc = HtmlDocument::parse("<p>a<noscript><b>enable js</b></noscript>b</p>");
        let blocks = doc.text_blocks(&default_options());
        assert_eq!(blocks[0].text, "a b");
    }

    #[test]
    fn test_other_tags_ignored() {
        let doc = HtmlDocument::parse("<nav>menu</nav><li>item</li><h1>title</h1>");
        assert!(doc.text_blocks(&default_options()).is_empty());
    }

    #[test]
    fn test_empty_tag_list_yields_nothing() {
        let doc = HtmlDocument::parse("<p>text</p>");
        let options = Options {
            block_tags: Vec::new(),
            ..Options::default()
        };
        assert!(doc.text_blocks(&options).is_empty());
    }

    #[test]
    fn test_vec_source_filters_by_tag() {
        let blocks = vec![
            TextBlock::new("p", "kept"),
            TextBlock::new("nav", "dropped"),
            TextBlock::new("DIV", "kept too"),
        ];
        let got = blocks.text_blocks(&default_options());
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].text, "kept too");
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        let doc = HtmlDocument::parse("<p>text<div>more");
        let blocks = doc.text_blocks(&default_options());
        assert!(blocks.iter().any(|b| b.text.contains("more")));
    }
}
