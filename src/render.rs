//! HTML rendering of a selected poem.
//!
//! Produces a standalone page that sets the poem right-to-left in the
//! Noto Nastaliq Urdu web font.

use std::fmt::Write;

/// Page title, "Urdu Poetry App".
pub const PAGE_TITLE: &str = "اردو شاعری ایپ";

const FONT_LINK: &str = "https://fonts.googleapis.com/css2?family=Noto+Nastaliq+Urdu:wght@400;700&display=swap";

const STYLE: &str = r#"
    .nastaliq-title {
        font-family: 'Noto Nastaliq Urdu', serif;
        font-size: 48px;
        text-align: center;
        direction: rtl;
        color: #2c3e50;
        margin-bottom: 20px;
    }
    .poem-container {
        font-family: 'Noto Nastaliq Urdu', serif;
        font-size: 32px;
        text-align: center;
        direction: rtl;
        line-height: 2.2;
        background-color: #fffbf0;
        padding: 30px;
        border-radius: 15px;
        border: 2px solid #d4af37;
        color: #1a1a1a;
        margin-top: 20px;
        box-shadow: 0 4px 15px rgba(0,0,0,0.1);
    }
    .poet-name {
        text-align: center;
        font-style: italic;
        color: #555;
        margin-bottom: 30px;
    }
"#;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `poem` (and optionally its poet) as a complete HTML document.
#[must_use]
pub fn render_page(poet: Option<&str>, poem: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ur\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
    let _ = writeln!(html, "<link href=\"{FONT_LINK}\" rel=\"stylesheet\">");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<p class=\"nastaliq-title\">{PAGE_TITLE}</p>");

    if let Some(poet) = poet.map(str::trim).filter(|p| !p.is_empty()) {
        let _ = writeln!(html, "<div class=\"poet-name\">— {} —</div>", escape_html(poet));
    }

    let _ = writeln!(html, "<div class=\"poem-container\">{}</div>", escape_html(poem));
    html.push_str("</body>\n</html>\n");
    html
}
