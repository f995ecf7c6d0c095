//! URL helpers for the on-page rules.
//!
//! Audit input URLs are frequently schemeless (`domain.com/post`), so host
//! extraction retries with an `https://` prefix before giving up. Segment
//! counting operates on the raw string, matching how the hierarchy rule is
//! defined.

use url::Url;

/// Extract the host from a URL string, accepting schemeless input.
///
/// Returns `None` for empty or unparseable input and for URLs without a
/// host. The result is lower-cased by the `url` crate's normalization.
#[must_use]
pub fn host(url_str: &str) -> Option<String> {
    let url_str = url_str.trim();
    if url_str.is_empty() {
        return None;
    }

    if let Ok(parsed) = Url::parse(url_str) {
        if let Some(h) = parsed.host_str() {
            return Some(h.to_string());
        }
    }

    // Schemeless input parses as a relative URL; retry as https
    let prefixed = format!("https://{url_str}");
    Url::parse(&prefixed)
        .ok()
        .and_then(|u| u.host_str().map(std::string::ToString::to_string))
}

/// Count `/`-separated segments of a raw URL string.
///
/// The empty string counts as one segment, so a bare domain scores 1 and
/// `https://domain.com/a/b` scores 5 (the scheme's empty segment included),
/// matching the hierarchy rule's definition.
#[must_use]
pub fn segment_count(url_str: &str) -> usize {
    url_str.split('/').count()
}

/// Whether the lower-cased URL contains the keyword slug.
///
/// An empty slug matches vacuously.
#[must_use]
pub fn contains_slug(url_str: &str, slug: &str) -> bool {
    url_str.to_lowercase().contains(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_accepts_absolute_urls() {
        assert_eq!(
            host("https://example.com/may-loc-nuoc").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn host_accepts_schemeless_urls() {
        assert_eq!(
            host("example.com/may-loc-nuoc/ion-kiem").as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn host_returns_none_for_empty_or_garbage() {
        assert_eq!(host(""), None);
        assert_eq!(host("   "), None);
        assert_eq!(host("::not a url::"), None);
    }

    #[test]
    fn segment_count_splits_the_raw_string() {
        assert_eq!(segment_count(""), 1);
        assert_eq!(segment_count("example.com/a/b"), 3);
        assert_eq!(segment_count("https://example.com/a/b"), 5);
    }

    #[test]
    fn contains_slug_is_case_insensitive_on_the_url() {
        assert!(contains_slug("Example.com/May-Loc-Nuoc", "may-loc-nuoc"));
        assert!(!contains_slug("example.com/other", "may-loc-nuoc"));
        assert!(contains_slug("anything", ""));
    }
}
