//! The on-page rule catalog.
//!
//! Twenty independent checks evaluated in fixed order against the
//! thresholds in [`Thresholds`]. Every audit emits every rule id exactly
//! once; missing structure (no headings, no images, no links) routes each
//! rule to its "requirement not met" branch instead of erroring.

use crate::keyword;
use crate::page::ParsedPage;
use crate::report::{AuditInput, CheckResult, CheckStatus};
use crate::thresholds::Thresholds;
use crate::url_audit;

/// Every rule id the engine emits, in emission order.
pub const RULE_IDS: [&str; 20] = [
    "1.2.1", "1.2.2", "1.2.3", "1.3.1", "1.3.2", "1.4.1", "1.4.2", "1.4.3", "1.5.1", "1.5.2",
    "1.5.3", "1.5.4", "1.5.5", "1.5.6", "1.5.7", "1.5.8", "1.5.9", "1.5.10", "1.5.11", "1.5.12",
];

/// Closing caution appended to every rule description.
const EXPERT_NOTE: &str = "Naturalness and user experience come first. \
Technical optimization must go hand in hand with the real value the article \
delivers. Do not try to manipulate the algorithm with dated black-hat \
tricks; focus on semantics to build durable authority with Google. Every \
small on-page structural improvement strengthens your entity's information \
graph. Keep refining each point until the score is perfect.";

/// Render the fixed four-part description template for one rule.
fn detailed_description(rule: &str, rationale: &str, remediation: &str, benefit: &str) -> String {
    format!(
        "IN-DEPTH ANALYSIS: {rule}\n\n\
         1. SEMANTIC RATIONALE: {rationale}\n\n\
         2. HOW TO FIX: {remediation}\n\n\
         3. STRATEGIC BENEFIT: {benefit}\n\n\
         4. EXPERT NOTE: {EXPERT_NOTE}"
    )
}

fn pass_or(passed: bool, otherwise: CheckStatus) -> CheckStatus {
    if passed {
        CheckStatus::Passed
    } else {
        otherwise
    }
}

/// Evaluate the full on-page rule catalog for one input.
///
/// Pure and infallible: no I/O, deterministic for a given input, and every
/// input (including empty strings and malformed markup) produces the
/// complete fixed-order result list.
#[must_use]
pub fn run_onpage_checks(input: &AuditInput, thresholds: &Thresholds) -> Vec<CheckResult> {
    let kw = keyword::matching_form(&input.main_keyword);
    let kw_slug = keyword::slug_form(&kw);

    let mut checks = Vec::with_capacity(RULE_IDS.len());

    // 1.2.x URL
    checks.push(CheckResult {
        id: "1.2.1".to_string(),
        label: "Hierarchical URL".to_string(),
        status: pass_or(
            url_audit::segment_count(&input.url) >= thresholds.min_url_segments,
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Hierarchical URL structure",
            "Helps bots understand the information architecture.",
            "Shape permalinks as domain/parent/child/slug.",
            "Faster indexing and better link juice flow.",
        )),
    });
    checks.push(CheckResult {
        id: "1.2.2".to_string(),
        label: "Keyword in URL".to_string(),
        status: pass_or(
            url_audit::contains_slug(&input.url, &kw_slug),
            CheckStatus::Failed,
        ),
        message: None,
        description: Some(detailed_description(
            "Keyword in URL",
            "A ranking and click-through signal.",
            "Use an unaccented slug joined with hyphens.",
            "Builds user trust on the results page.",
        )),
    });
    let url_len = input.url.chars().count();
    checks.push(CheckResult {
        id: "1.2.3".to_string(),
        label: "URL under 112 characters".to_string(),
        status: pass_or(url_len < thresholds.max_url_len, CheckStatus::Failed),
        message: Some(format!("{url_len} characters")),
        description: Some(detailed_description(
            "Optimal URL length",
            "Keeps the URL fully visible on the SERP.",
            "Remove meaningless stop words.",
            "Avoids truncation of the important part.",
        )),
    });

    // 1.3.x Title
    let title_lower = input.title.to_lowercase();
    let title_head = title_lower
        .split_whitespace()
        .take(thresholds.title_keyword_window)
        .collect::<Vec<_>>()
        .join(" ");
    checks.push(CheckResult {
        id: "1.3.1".to_string(),
        label: "Keyword at the start of the title (3 words)".to_string(),
        status: pass_or(title_head.contains(&kw), CheckStatus::Failed),
        message: None,
        description: Some(detailed_description(
            "Keyword position in the title",
            "Weight is assigned left to right.",
            "Move the keyword into the first three words.",
            "The strongest single on-page weight gain.",
        )),
    });
    let title_len = input.title.chars().count();
    checks.push(CheckResult {
        id: "1.3.2".to_string(),
        label: "Title under 65 characters".to_string(),
        status: pass_or(title_len < thresholds.max_title_len, CheckStatus::Failed),
        message: Some(format!("{title_len} characters")),
        description: Some(detailed_description(
            "Title length",
            "Avoids truncation in Google Search.",
            "Keep the wording concise and compelling.",
            "Displays cleanly on mobile and desktop.",
        )),
    });

    // 1.4.x Meta description
    let meta_lower = input.meta_description.to_lowercase();
    checks.push(CheckResult {
        id: "1.4.1".to_string(),
        label: "Meta description contains the keyword".to_string(),
        status: pass_or(meta_lower.contains(&kw), CheckStatus::Failed),
        message: None,
        description: Some(detailed_description(
            "Keyword in the meta description",
            "The bold-match effect lifts click-through.",
            "Work the keyword naturally into the description.",
            "Stands out against competing snippets.",
        )),
    });
    let meta_len = input.meta_description.chars().count();
    checks.push(CheckResult {
        id: "1.4.2".to_string(),
        label: "Meta description length 230-320".to_string(),
        status: pass_or(
            thresholds.meta_len_range.contains(&meta_len),
            CheckStatus::Warning,
        ),
        message: Some(format!("{meta_len} characters")),
        description: Some(detailed_description(
            "Optimal meta description length",
            "Uses the full snippet space available.",
            "Extend the summary with the article's value.",
            "Gives enough information to earn the click.",
        )),
    });
    let meta_kw_count = keyword::count_occurrences(&meta_lower, &kw);
    checks.push(CheckResult {
        id: "1.4.3".to_string(),
        label: "Keyword twice in the meta description".to_string(),
        status: pass_or(
            meta_kw_count >= thresholds.min_meta_keyword_count,
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Keyword frequency in the meta description",
            "Reinforces bolding and topic recognition.",
            "Place the keyword near the start and the end.",
            "Confirms the topic for the reader.",
        )),
    });

    // 1.5.x Body
    let page = ParsedPage::parse(&input.content, thresholds.image_sibling_window);
    let host = url_audit::host(&input.url);
    let host = host.as_deref();

    checks.push(CheckResult {
        id: "1.5.1".to_string(),
        label: "Keyword in the first 100 words".to_string(),
        status: pass_or(
            page.opening_window(thresholds.edge_word_window).contains(&kw),
            CheckStatus::Failed,
        ),
        message: None,
        description: Some(detailed_description(
            "Keyword in the opening",
            "Identifies the entity immediately.",
            "Rework the introduction to include the main keyword.",
            "Bots recognize the topic faster.",
        )),
    });

    let density = page.keyword_density(&kw);
    checks.push(CheckResult {
        id: "1.5.2".to_string(),
        label: "Keyword density (0.8% - 1.3%)".to_string(),
        status: pass_or(
            thresholds.density_range.contains(&density),
            CheckStatus::Warning,
        ),
        message: Some(format!("{density:.2}%")),
        description: Some(detailed_description(
            "Keyword density",
            "Guards against keyword stuffing.",
            "Add or remove mentions, or use synonyms.",
            "Balances optimization with readability.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.3".to_string(),
        label: "Keyword in the first H2".to_string(),
        status: pass_or(page.first_h2_text().contains(&kw), CheckStatus::Failed),
        message: None,
        description: Some(detailed_description(
            "First H2 and the keyword",
            "Headings are strong structural signals.",
            "Put the keyword into the first H2.",
            "Asserts an in-depth article structure.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.4".to_string(),
        label: "Keyword in 2/3 of H2 headings".to_string(),
        status: pass_or(
            page.h2_keyword_ratio(&kw) >= thresholds.min_h2_keyword_ratio,
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Keyword distribution across headings",
            "Maintains the semantic thread of the article.",
            "Add the keyword to more H2 headings.",
            "Strengthens the information graph.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.5".to_string(),
        label: "Embedded YouTube video".to_string(),
        status: pass_or(
            input.content.contains("youtube.com/embed"),
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Multimedia (video)",
            "Raises time on page and engagement.",
            "Embed a relevant YouTube video.",
            "Rich content is rated higher.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.6".to_string(),
        label: "Image under every H2".to_string(),
        status: pass_or(
            !page.h2_texts.is_empty() && page.all_h2_have_image(),
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Illustration per heading",
            "Breaks up the content and eases reading.",
            "Place an image right below each H2.",
            "Avoids long monotonous text blocks.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.7".to_string(),
        label: "Alt text on every image".to_string(),
        status: pass_or(
            !page.image_alts.is_empty() && page.all_images_have_alt(),
            CheckStatus::Failed,
        ),
        message: None,
        description: Some(detailed_description(
            "Alt text coverage",
            "Lets Google understand the images.",
            "Add descriptive alt text carrying the keyword.",
            "Supports image SEO and accessibility.",
        )),
    });

    // Coarse caption probe on the raw markup, as the catalog defines it
    let has_captions =
        input.content.contains("<figcaption") || input.content.contains("class=\"caption\"");
    checks.push(CheckResult {
        id: "1.5.8".to_string(),
        label: "Image captions".to_string(),
        status: pass_or(has_captions, CheckStatus::Warning),
        message: None,
        description: Some(detailed_description(
            "Image captions",
            "Gives readers context for each image.",
            "Use <figcaption> or a caption line under images.",
            "Adds polish and credibility to the article.",
        )),
    });

    let word_count = page.word_count();
    checks.push(CheckResult {
        id: "1.5.9".to_string(),
        label: "At least 1000 words".to_string(),
        status: pass_or(word_count >= thresholds.min_word_count, CheckStatus::Failed),
        message: Some(format!("{word_count} words")),
        description: Some(detailed_description(
            "Article length",
            "In-depth content holds the advantage.",
            "Add examples and an FAQ section.",
            "Builds topical authority.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.10".to_string(),
        label: "Internal links open a new tab".to_string(),
        status: pass_or(
            page.internal_links_open_new_tab(host),
            CheckStatus::Warning,
        ),
        message: None,
        description: Some(detailed_description(
            "Internal link behavior",
            "Keeps the reader on the current page.",
            "Add target=\"_blank\" to internal links.",
            "Lowers the site's bounce rate.",
        )),
    });

    let reference_links = page.reference_link_count(host);
    checks.push(CheckResult {
        id: "1.5.11".to_string(),
        label: "Reference links (2-10)".to_string(),
        status: pass_or(
            thresholds.reference_link_range.contains(&reference_links),
            CheckStatus::Warning,
        ),
        message: Some(format!("{reference_links} links")),
        description: Some(detailed_description(
            "External reference links",
            "Evidence of factual grounding.",
            "Cite reputable sources (Wikipedia, major outlets).",
            "Reinforces E-E-A-T for the content.",
        )),
    });

    checks.push(CheckResult {
        id: "1.5.12".to_string(),
        label: "Keyword in the last 100 words".to_string(),
        status: pass_or(
            page.closing_window(thresholds.edge_word_window).contains(&kw),
            CheckStatus::Failed,
        ),
        message: None,
        description: Some(detailed_description(
            "Keyword in the conclusion",
            "Closes the semantic thread tightly.",
            "Repeat the main keyword in the closing section.",
            "Completes the semantic loop.",
        )),
    });

    debug_assert_eq!(checks.len(), RULE_IDS.len());
    checks
}
