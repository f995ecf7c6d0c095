//! # seo-audit
//!
//! Deterministic on-page SEO auditing for article pages.
//!
//! The core is a pure rule engine: given a keyword, URL, title, meta
//! description, and HTML body it evaluates a fixed catalog of twenty
//! pass/fail/warning checks (URL shape, keyword placement, density,
//! heading coverage, image hygiene, link profile) against exact
//! thresholds. Around the engine the crate carries the contracts of the
//! larger audit flow: the AI evaluator's prompt and response schema with
//! a neutral fallback, the combined report, and a capped audit history.
//!
//! ## Quick Start
//!
//! ```rust
//! use seo_audit::{audit, AuditInput, CheckStatus};
//!
//! let input = AuditInput {
//!     main_keyword: "water filter".to_string(),
//!     url: "https://example.com/guides/home/water-filter".to_string(),
//!     title: "Water filter buying guide".to_string(),
//!     meta_description: "How to pick a water filter.".to_string(),
//!     content: "<h2>Choosing a water filter</h2><p>...</p>".to_string(),
//!     outline: String::new(),
//! };
//!
//! let checks = audit(&input);
//! assert_eq!(checks.len(), 20);
//! let url_keyword = checks.iter().find(|c| c.id == "1.2.2").unwrap();
//! assert_eq!(url_keyword.status, CheckStatus::Passed);
//! ```
//!
//! ## Guarantees
//!
//! - `audit` is pure and infallible: no I/O, deterministic output, and
//!   every input (empty strings, malformed markup) produces the complete
//!   fixed-order check list.
//! - Collaborator failures never escape: a broken evaluator response
//!   degrades to a neutral report, corrupt stored history loads as empty.

mod error;
mod report;
mod thresholds;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Keyword normalization and occurrence counting.
pub mod keyword;

/// Parsed page representation and derived statistics.
pub mod page;

/// URL helpers for the on-page rules.
pub mod url_audit;

/// The on-page rule catalog.
pub mod checks;

/// Heading outline extraction.
pub mod outline;

/// AI evaluator contract: rubrics, prompt assembly, response decoding.
pub mod evaluator;

/// Capped, corruption-tolerant audit history.
pub mod history;

// Public API - re-exports
pub use checks::{run_onpage_checks, RULE_IDS};
pub use error::{Error, Result};
pub use report::{
    AiReport, AuditInput, AuditReport, CheckResult, CheckStatus, ScoreBand, ScoreSet,
    StrategicFeedback,
};
pub use thresholds::Thresholds;

/// Run the on-page rule catalog with the standard thresholds.
///
/// Returns the fixed-order list of twenty check results. Never fails:
/// malformed or empty input degrades individual rules to their
/// "requirement not met" branch.
///
/// # Example
///
/// ```rust
/// use seo_audit::audit;
///
/// let checks = audit(&Default::default());
/// assert_eq!(checks.len(), 20);
/// ```
#[must_use]
pub fn audit(input: &AuditInput) -> Vec<CheckResult> {
    audit_with_thresholds(input, &Thresholds::default())
}

/// Run the on-page rule catalog with custom thresholds.
///
/// # Example
///
/// ```rust
/// use seo_audit::{audit_with_thresholds, Thresholds};
///
/// let thresholds = Thresholds {
///     min_word_count: 600,
///     ..Thresholds::default()
/// };
/// let checks = audit_with_thresholds(&Default::default(), &thresholds);
/// assert_eq!(checks.len(), 20);
/// ```
#[must_use]
pub fn audit_with_thresholds(input: &AuditInput, thresholds: &Thresholds) -> Vec<CheckResult> {
    checks::run_onpage_checks(input, thresholds)
}
