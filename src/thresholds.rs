//! Threshold configuration for the on-page rule catalog.
//!
//! The `Thresholds` struct carries every numeric constant the rule engine
//! compares against. `Default::default()` yields the normative values; they
//! are public fields so callers can tune individual rules.

/// Numeric thresholds for on-page checks.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard rule set.
///
/// # Example
///
/// ```rust
/// use seo_audit::Thresholds;
///
/// // Standard thresholds
/// let thresholds = Thresholds::default();
///
/// // Stricter minimum length
/// let thresholds = Thresholds {
///     min_word_count: 1500,
///     ..Thresholds::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Minimum `/`-separated URL segment count for a hierarchical URL.
    ///
    /// Default: `4`
    pub min_url_segments: usize,

    /// Maximum URL length in characters (exclusive).
    ///
    /// Default: `112`
    pub max_url_len: usize,

    /// Maximum title length in characters (exclusive).
    ///
    /// Default: `65`
    pub max_title_len: usize,

    /// Number of leading title tokens searched for the keyword.
    ///
    /// Default: `3`
    pub title_keyword_window: usize,

    /// Inclusive meta description length range in characters.
    ///
    /// Default: `230..=320`
    pub meta_len_range: std::ops::RangeInclusive<usize>,

    /// Minimum keyword occurrences in the meta description.
    ///
    /// Default: `2`
    pub min_meta_keyword_count: usize,

    /// Word-window size for the opening and closing keyword checks.
    ///
    /// Default: `100`
    pub edge_word_window: usize,

    /// Inclusive keyword density range in percent.
    ///
    /// Default: `0.8..=1.3`
    pub density_range: std::ops::RangeInclusive<f64>,

    /// Minimum fraction of H2 headings containing the keyword.
    ///
    /// Default: `0.66`
    pub min_h2_keyword_ratio: f64,

    /// How many element siblings after an H2 are scanned for an image.
    ///
    /// Default: `5`
    pub image_sibling_window: usize,

    /// Minimum total word count of the body text.
    ///
    /// Default: `1000`
    pub min_word_count: usize,

    /// Inclusive range of acceptable external reference link counts.
    ///
    /// Default: `2..=10`
    pub reference_link_range: std::ops::RangeInclusive<usize>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            min_url_segments: 4,
            max_url_len: 112,
            max_title_len: 65,
            title_keyword_window: 3,
            meta_len_range: 230..=320,
            min_meta_keyword_count: 2,
            edge_word_window: 100,
            density_range: 0.8..=1.3,
            min_h2_keyword_ratio: 0.66,
            image_sibling_window: 5,
            min_word_count: 1000,
            reference_link_range: 2..=10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_normative_constants() {
        let t = Thresholds::default();
        assert_eq!(t.min_url_segments, 4);
        assert_eq!(t.max_url_len, 112);
        assert_eq!(t.max_title_len, 65);
        assert_eq!(t.title_keyword_window, 3);
        assert_eq!(t.meta_len_range, 230..=320);
        assert_eq!(t.min_meta_keyword_count, 2);
        assert_eq!(t.edge_word_window, 100);
        assert_eq!(t.density_range, 0.8..=1.3);
        assert!((t.min_h2_keyword_ratio - 0.66).abs() < f64::EPSILON);
        assert_eq!(t.image_sibling_window, 5);
        assert_eq!(t.min_word_count, 1000);
        assert_eq!(t.reference_link_range, 2..=10);
    }

    #[test]
    fn struct_update_syntax_overrides_single_field() {
        let t = Thresholds {
            min_word_count: 1500,
            ..Thresholds::default()
        };
        assert_eq!(t.min_word_count, 1500);
        assert_eq!(t.max_url_len, 112);
    }
}
