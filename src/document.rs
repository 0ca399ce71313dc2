//! Splitting a custom menu page into the parts a host page can use.
use regex::Regex;
use std::sync::OnceLock;

/// The `<head>` and `<body>` contents of a custom menu page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlParts<'a> {
    /// Inside of the first `<head>` element, or empty.
    pub head_content: &'a str,
    /// Inside of the first `<body>` element, or the whole input when
    /// it has no body.
    pub body_content: &'a str,
}

/// Check whether `html` is a complete document rather than a fragment.
///
/// Only the four literal prefixes `<!DOCTYPE`, `<!doctype`, `<html`
/// and `<HTML` count, after leading whitespace.
pub fn is_full_html_document(html: &str) -> bool {
    let trimmed = html.trim_start_matches(is_leading_space);
    ["<!DOCTYPE", "<!doctype", "<html", "<HTML"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Whitespace and line terminators as a browser trims them.
///
/// That is the unicode white space set plus the byte order mark, but
/// without U+0085.
fn is_leading_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Extract the head and body contents of `html`.
///
/// This never fails and doesn't check that the markup is well formed;
/// with several `<body>` elements, only the first is found.
pub fn extract_head_content(html: &str) -> HtmlParts<'_> {
    let head_content = element_content(head_pattern(), html).unwrap_or("");
    let body_content = element_content(body_pattern(), html).unwrap_or(html);
    HtmlParts {
        head_content,
        body_content,
    }
}

fn element_content<'a>(pattern: Option<&Regex>, html: &'a str) -> Option<&'a str> {
    pattern?
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn head_pattern() -> Option<&'static Regex> {
    static HEAD: OnceLock<Option<Regex>> = OnceLock::new();
    HEAD.get_or_init(|| element_pattern("head")).as_ref()
}

fn body_pattern() -> Option<&'static Regex> {
    static BODY: OnceLock<Option<Regex>> = OnceLock::new();
    BODY.get_or_init(|| element_pattern("body")).as_ref()
}

fn element_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?is)<{name}[^>]*>(.*?)</{name}>")).ok()
}
