//! Parsed page representation and derived statistics.
//!
//! `ParsedPage` is the engine-internal view of one content fragment:
//! plain text, the word list, and the heading/image/link inventories the
//! rule catalog reads. It is rebuilt for every audit call and owns all of
//! its data, so the backing DOM is dropped as soon as parsing finishes.

use crate::dom;
use crate::keyword;

/// An anchor element's audit-relevant attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInfo {
    /// `href` attribute, absent when the anchor has none.
    pub href: Option<String>,
    /// `target` attribute.
    pub target: Option<String>,
}

impl LinkInfo {
    /// Internal means a root-relative href or one referencing the page host.
    /// Anchors without an href are never internal.
    #[must_use]
    pub fn is_internal(&self, host: Option<&str>) -> bool {
        match &self.href {
            Some(href) => {
                href.starts_with('/') || host.is_some_and(|h| href.contains(h))
            }
            None => false,
        }
    }

    /// External (reference) means the href does not mention the page host.
    /// Root-relative hrefs count here too: they never name the host, and the
    /// reference-link rule is defined over host mentions only.
    #[must_use]
    pub fn is_reference(&self, host: Option<&str>) -> bool {
        match (&self.href, host) {
            (Some(href), Some(h)) => !href.contains(h),
            _ => true,
        }
    }
}

/// Derived, owned view of one parsed content fragment.
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Concatenated text content, trimmed of surrounding whitespace.
    pub plain_text: String,

    /// `plain_text` split on whitespace runs, order preserved. Empty or
    /// all-whitespace text yields an empty list.
    pub words: Vec<String>,

    /// Text of each H2 in document order.
    pub h2_texts: Vec<String>,

    /// Per-H2 flag: an image was found within the configured number of
    /// following element siblings (or nested inside one of them).
    pub h2_has_image: Vec<bool>,

    /// `alt` attribute of each image element, in document order.
    pub image_alts: Vec<Option<String>>,

    /// All anchor elements.
    pub links: Vec<LinkInfo>,
}

impl ParsedPage {
    /// Parse a content fragment and derive every statistic the rules read.
    ///
    /// Never fails: malformed markup parses into a best-effort tree and
    /// empty input yields a page whose lists are all empty.
    #[must_use]
    pub fn parse(content: &str, image_sibling_window: usize) -> Self {
        let doc = dom::parse_document(content);

        let body = dom::query_selector_all(&doc, "body");
        let plain_text = dom::text_content(&body).trim().to_string();
        let words: Vec<String> = plain_text
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let h2s = dom::query_selector_all(&doc, "h2");
        let mut h2_texts = Vec::new();
        let mut h2_has_image = Vec::new();
        for node in h2s.nodes() {
            let sel = dom::Selection::from(*node);
            h2_texts.push(dom::text_content(&sel).to_string());
            h2_has_image.push(dom::image_within_following_siblings(
                node,
                image_sibling_window,
            ));
        }

        let image_alts = dom::query_selector_all(&doc, "img")
            .iter()
            .map(|img| dom::get_attribute(&img, "alt"))
            .collect();

        let links = dom::query_selector_all(&doc, "a")
            .iter()
            .map(|a| LinkInfo {
                href: dom::get_attribute(&a, "href"),
                target: dom::get_attribute(&a, "target"),
            })
            .collect();

        ParsedPage {
            plain_text,
            words,
            h2_texts,
            h2_has_image,
            image_alts,
            links,
        }
    }

    /// Total word count of the body text.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The first `window` words joined and lower-cased.
    #[must_use]
    pub fn opening_window(&self, window: usize) -> String {
        let end = window.min(self.words.len());
        self.words[..end].join(" ").to_lowercase()
    }

    /// The last `window` words joined and lower-cased.
    #[must_use]
    pub fn closing_window(&self, window: usize) -> String {
        let start = self.words.len().saturating_sub(window);
        self.words[start..].join(" ").to_lowercase()
    }

    /// Keyword density in percent: occurrences of the (lower-cased) keyword
    /// in the lower-cased body text, over the total word count. Zero words
    /// means zero density.
    #[must_use]
    pub fn keyword_density(&self, kw: &str) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        let occurrences = keyword::count_occurrences(&self.plain_text.to_lowercase(), kw);
        (occurrences as f64 / self.words.len() as f64) * 100.0
    }

    /// Lower-cased text of the first H2, empty when the page has none.
    #[must_use]
    pub fn first_h2_text(&self) -> String {
        self.h2_texts
            .first()
            .map(|t| t.to_lowercase())
            .unwrap_or_default()
    }

    /// Fraction of H2 headings whose text contains the keyword. Zero when
    /// the page has no H2 headings.
    #[must_use]
    pub fn h2_keyword_ratio(&self, kw: &str) -> f64 {
        if self.h2_texts.is_empty() {
            return 0.0;
        }
        let with_kw = self
            .h2_texts
            .iter()
            .filter(|t| t.to_lowercase().contains(kw))
            .count();
        with_kw as f64 / self.h2_texts.len() as f64
    }

    /// Whether every H2 has an image within its sibling window. Vacuously
    /// true with zero H2s; the rule layer additionally requires at least one.
    #[must_use]
    pub fn all_h2_have_image(&self) -> bool {
        self.h2_has_image.iter().all(|has| *has)
    }

    /// Whether every image carries a non-empty (trimmed) alt attribute.
    /// Vacuously true with zero images; the rule layer requires at least one.
    #[must_use]
    pub fn all_images_have_alt(&self) -> bool {
        self.image_alts
            .iter()
            .all(|alt| alt.as_deref().is_some_and(|a| !a.trim().is_empty()))
    }

    /// Internal links: root-relative hrefs or hrefs referencing `host`.
    #[must_use]
    pub fn internal_links(&self, host: Option<&str>) -> Vec<&LinkInfo> {
        self.links
            .iter()
            .filter(|l| l.is_internal(host))
            .collect()
    }

    /// Count of reference links (hrefs not mentioning `host`).
    #[must_use]
    pub fn reference_link_count(&self, host: Option<&str>) -> usize {
        self.links.iter().filter(|l| l.is_reference(host)).count()
    }

    /// True when at least one internal link exists and every internal link
    /// opens in a new tab.
    #[must_use]
    pub fn internal_links_open_new_tab(&self, host: Option<&str>) -> bool {
        let internal = self.internal_links(host);
        !internal.is_empty()
            && internal
                .iter()
                .all(|l| l.target.as_deref() == Some("_blank"))
    }
}
