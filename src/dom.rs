//! DOM operations adapter.
//!
//! Thin read-only layer over the `dom_query` crate covering exactly what the
//! rule engine needs: tolerant parsing, text content, attribute lookup, tag
//! queries, and forward element-sibling scans. No tree mutation.

// Re-export core types for module-internal use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril so callers can hold text without copying
pub use tendril::StrTendril;

/// Parse an HTML fragment into a document.
///
/// `dom_query` (html5ever underneath) is error-recovering: malformed markup
/// yields a best-effort tree and empty input yields an empty document, so
/// this never fails. Rules reading a degenerate document see empty text and
/// empty element lists, which is the behavior the engine wants.
#[must_use]
pub fn parse_document(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of a selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get an attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Query all elements by CSS selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

/// Get the tag name (lowercase) of the first node in a selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether a node is an `img` element or contains one.
#[must_use]
pub fn is_or_contains_image(node: &NodeRef) -> bool {
    if let Some(name) = node.node_name() {
        if name.eq_ignore_ascii_case("img") {
            return true;
        }
    }
    Selection::from(*node).select("img").length() > 0
}

/// Scan up to `window` element siblings after `node`, returning true if any
/// of them is or contains an image.
#[must_use]
pub fn image_within_following_siblings(node: &NodeRef, window: usize) -> bool {
    let mut next = node.next_element_sibling();
    let mut scanned = 0;
    while let Some(sibling) = next {
        if scanned >= window {
            break;
        }
        if is_or_contains_image(&sibling) {
            return true;
        }
        next = sibling.next_element_sibling();
        scanned += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_document_accepts_malformed_markup() {
        let doc = parse_document("<p>text<div>more");
        let text = text_content(&doc.select("body"));
        assert!(text.contains("text"));
        assert!(text.contains("more"));
    }

    #[test]
    fn parse_document_accepts_empty_input() {
        let doc = parse_document("");
        assert_eq!(doc.select("h2").length(), 0);
        assert!(text_content(&doc.select("body")).trim().is_empty());
    }

    #[test]
    fn get_attribute_reads_alt_text() {
        let doc = parse_document(r#"<img src="a.png" alt="a chart">"#);
        let img = doc.select("img");
        assert_eq!(get_attribute(&img, "alt").as_deref(), Some("a chart"));
        assert_eq!(get_attribute(&img, "title"), None);
    }

    #[test]
    fn image_scan_finds_nested_image_within_window() {
        let doc = parse_document(
            "<h2>A</h2><p>one</p><figure><img src='x.png'></figure><p>two</p>",
        );
        let h2 = doc.select("h2");
        let node = h2.nodes().first().copied().unwrap();
        assert!(image_within_following_siblings(&node, 5));
    }

    #[test]
    fn image_scan_respects_the_window() {
        let doc = parse_document(
            "<h2>A</h2><p>1</p><p>2</p><p>3</p><p>4</p><p>5</p><img src='x.png'>",
        );
        let h2 = doc.select("h2");
        let node = h2.nodes().first().copied().unwrap();
        assert!(!image_within_following_siblings(&node, 5));
        assert!(image_within_following_siblings(&node, 6));
    }

    #[test]
    fn sibling_scan_skips_text_nodes() {
        let doc = parse_document("<h2>A</h2>\nsome text\n<img src='x.png'>");
        let h2 = doc.select("h2");
        let node = h2.nodes().first().copied().unwrap();
        assert!(image_within_following_siblings(&node, 1));
    }
}
