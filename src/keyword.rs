//! Keyword normalization and matching.
//!
//! The main keyword is matched in two forms: a lower-cased matching form
//! used against titles, meta descriptions, and body text, and a URL-slug
//! form (diacritics stripped, whitespace hyphenated) used against URLs.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Matches runs of whitespace for slug hyphenation.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Lower-case matching form of a keyword.
#[inline]
#[must_use]
pub fn matching_form(keyword: &str) -> String {
    keyword.to_lowercase()
}

/// URL-slug form of a keyword: lower-cased, canonically decomposed with
/// combining marks stripped, whitespace runs collapsed to single hyphens.
///
/// `"máy lọc nước"` becomes `"may-loc-nuoc"`. Base letters without a
/// decomposition (such as the Vietnamese `đ`) pass through unchanged.
#[must_use]
pub fn slug_form(keyword: &str) -> String {
    let stripped: String = keyword
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    WHITESPACE_RUN.replace_all(&stripped, "-").into_owned()
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Both strings are compared as-is; callers lower-case beforehand. An empty
/// needle counts as zero occurrences.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_form_lowercases() {
        assert_eq!(matching_form("Máy Lọc Nước"), "máy lọc nước");
    }

    #[test]
    fn slug_form_strips_diacritics_and_hyphenates() {
        assert_eq!(slug_form("máy lọc nước"), "may-loc-nuoc");
        assert_eq!(slug_form("Água Pura"), "agua-pura");
    }

    #[test]
    fn slug_form_collapses_whitespace_runs() {
        assert_eq!(slug_form("water   filter\tsystem"), "water-filter-system");
    }

    #[test]
    fn slug_form_is_identity_for_plain_ascii() {
        assert_eq!(slug_form("reverse osmosis"), "reverse-osmosis");
    }

    #[test]
    fn count_occurrences_is_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("water filter and water filter", "water filter"), 2);
        assert_eq!(count_occurrences("no match here", "keyword"), 0);
    }

    #[test]
    fn count_occurrences_treats_empty_needle_as_zero() {
        assert_eq!(count_occurrences("anything", ""), 0);
    }
}
