//! Input and report types for the audit pipeline.
//!
//! These types define the caller-supplied page record, the per-rule check
//! results produced by the on-page engine, and the combined report shape
//! shared with the AI evaluator and the history store. All of them
//! round-trip through JSON (camelCase on the wire, matching the evaluator
//! response schema and stored history records).

use serde::{Deserialize, Serialize};

/// Caller-supplied page data for one audit.
///
/// All fields are plain strings; none are mandatory. Missing-field
/// validation is the caller's concern - the engine degrades gracefully on
/// empty input rather than rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditInput {
    /// Primary target phrase. Lower-cased and diacritic-stripped for matching.
    pub main_keyword: String,

    /// Candidate canonical path for the page.
    pub url: String,

    /// Page title.
    pub title: String,

    /// Meta description.
    pub meta_description: String,

    /// HTML fragment of the article body.
    pub content: String,

    /// Heading outline in `#`-prefixed text form.
    ///
    /// Only consumed by the evaluator prompt; derivable from `content` via
    /// [`crate::outline::extract_outline`].
    pub outline: String,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Requirement met.
    Passed,
    /// Requirement not met; treated as an error-level finding.
    Failed,
    /// Requirement not met; advisory only.
    #[default]
    Warning,
    /// Not yet evaluated. Reserved for streamed display state; the on-page
    /// engine never emits this.
    Pending,
}

/// One evaluated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckResult {
    /// Stable rule identifier (e.g. "1.5.9"), unique within one audit.
    pub id: String,

    /// Short human-readable rule name.
    pub label: String,

    /// Pass/fail/warning outcome.
    pub status: CheckStatus,

    /// Computed metric rendered as text (character count, percentage, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Long-form explanation: rationale and remediation. Static per rule for
    /// on-page checks, model-written for evaluator checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Aggregate scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSet {
    pub overall: f64,
    pub onpage: f64,
    pub outline: f64,
    pub writing: f64,
}

/// Strategic pros/cons/summary feedback from the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategicFeedback {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub summary: String,
}

/// Structured response from the AI evaluator.
///
/// Every field carries a serde default so a partial or empty response
/// (`{}`) still decodes to a well-formed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiReport {
    /// Outline-structure checks.
    pub outline_checks: Vec<CheckResult>,

    /// Writing-quality checks.
    pub writing_checks: Vec<CheckResult>,

    /// Aggregate scores.
    pub scores: ScoreSet,

    /// Pros/cons/summary assessment.
    pub strategic_feedback: StrategicFeedback,
}

impl AiReport {
    /// Neutral value substituted when the evaluator fails: zero scores,
    /// empty check lists, a fixed notice in the feedback.
    #[must_use]
    pub fn fallback() -> Self {
        AiReport {
            outline_checks: Vec::new(),
            writing_checks: Vec::new(),
            scores: ScoreSet::default(),
            strategic_feedback: StrategicFeedback {
                pros: Vec::new(),
                cons: vec!["Evaluator connection failed".to_string()],
                summary: "The evaluation service is unavailable; only on-page checks were run.".to_string(),
            },
        }
    }
}

/// Complete audit report: deterministic on-page results merged with the
/// evaluator's outline/writing assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditReport {
    /// On-page rule results in fixed catalog order.
    pub on_page: Vec<CheckResult>,

    /// Outline-structure checks from the evaluator.
    pub outline: Vec<CheckResult>,

    /// Writing-quality checks from the evaluator.
    pub writing: Vec<CheckResult>,

    /// Aggregate scores.
    pub scores: ScoreSet,

    /// Pros/cons/summary assessment.
    pub strategic_feedback: StrategicFeedback,
}

impl AuditReport {
    /// Combine on-page results with an evaluator report.
    #[must_use]
    pub fn assemble(on_page: Vec<CheckResult>, ai: AiReport) -> Self {
        AuditReport {
            on_page,
            outline: ai.outline_checks,
            writing: ai.writing_checks,
            scores: ai.scores,
            strategic_feedback: ai.strategic_feedback,
        }
    }
}

/// Display band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    Good,
    /// 50 to 79.
    Fair,
    /// Below 50.
    Poor,
}

impl ScoreBand {
    /// Band for a given score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_status_serializes_lowercase() {
        let json = serde_json::to_string(&CheckStatus::Passed).unwrap();
        assert_eq!(json, "\"passed\"");
        let back: CheckStatus = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(back, CheckStatus::Warning);
    }

    #[test]
    fn check_result_decodes_without_optional_fields() {
        let result: CheckResult =
            serde_json::from_str(r#"{"id":"1.2.3","label":"URL length","status":"failed"}"#)
                .unwrap();
        assert_eq!(result.id, "1.2.3");
        assert_eq!(result.status, CheckStatus::Failed);
        assert!(result.message.is_none());
        assert!(result.description.is_none());
    }

    #[test]
    fn audit_input_round_trips_camel_case() {
        let input = AuditInput {
            main_keyword: "water filter".to_string(),
            url: "example.com/water-filter".to_string(),
            ..AuditInput::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"mainKeyword\""));
        assert!(json.contains("\"metaDescription\""));
        let back: AuditInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn ai_report_decodes_from_empty_object() {
        let report: AiReport = serde_json::from_str("{}").unwrap();
        assert!(report.outline_checks.is_empty());
        assert!(report.writing_checks.is_empty());
        assert_eq!(report.scores.overall, 0.0);
        assert!(report.strategic_feedback.summary.is_empty());
    }

    #[test]
    fn score_bands_split_at_50_and_80() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(50.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(49.9), ScoreBand::Poor);
    }
}
