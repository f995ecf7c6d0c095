//! Heading outline extraction.
//!
//! Renders the `h1`-`h4` headings of a content fragment as a `#`-prefixed
//! text outline, one heading per line, in document order. The outline feeds
//! the evaluator prompt; it is derived automatically so callers don't have
//! to maintain it by hand.

use crate::dom;

/// Extract a markdown-style outline from a content fragment.
///
/// Returns an empty string when the fragment has no `h1`-`h4` headings or
/// cannot be parsed into any.
#[must_use]
pub fn extract_outline(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let doc = dom::parse_document(content);
    let headings = dom::query_selector_all(&doc, "h1, h2, h3, h4");

    let mut outline = String::new();
    for heading in headings.iter() {
        let prefix = match dom::tag_name(&heading).as_deref() {
            Some("h1") => "# ",
            Some("h2") => "## ",
            Some("h3") => "### ",
            _ => "#### ",
        };
        let text = dom::text_content(&heading);
        outline.push_str(prefix);
        outline.push_str(text.trim());
        outline.push('\n');
    }
    outline
}
