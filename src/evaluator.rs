//! AI evaluator contract.
//!
//! The outline and writing assessments come from a remote generative model.
//! This module owns the deterministic halves of that exchange: the fixed
//! rubric texts, prompt assembly, and schema-tolerant response decoding
//! with a neutral fallback. The transport itself is behind the [`Evaluate`]
//! trait; the crate never opens a connection.

use crate::error::{Error, Result};
use crate::report::{AiReport, AuditInput};

/// Outline-optimization checklist sent with every evaluation request.
pub const OUTLINE_RUBRIC: &str = "\
PART 2: OUTLINE OPTIMIZATION CHECKLIST
1: MAIN CONTENT
- Does the main content answer the primary search intent directly?
- Does it focus on macro semantics?
- Are root attributes used to develop the core content?
- Are headings phrased as questions?
- Are all four question types applied: boolean (yes/no), definition, grouping (list), comparison?
- Does each H2 carry a note on its content and primary attribute?
- Does each H3 carry a note on its detailed content?
- Is the content sufficient to answer the primary search intent in full?

2: CONTEXTUAL BORDER
- Is the transition point between main and supplementary content clearly marked?
- Does the border mark the shift from direct answers to semantic expansion?
- Is the border placed sensibly?

3: SUPPLEMENTARY CONTENT
- Does the supplementary content use exactly one H2?
- At most four H3 headings?
- Does it deepen the micro semantics?
- Are unique and rare attributes used to expand and deepen?
- Does it answer secondary queries and use lexical relations (antonyms)?
- Does it add related information not covered by the main content?
- Does it raise semantic cohesion with the primary topic?
- Does each H3 carry a note on its detailed content?

4: FORMAT AND STRUCTURE
- Is there a primary H1 at the top of the outline?
- Are the two parts marked: ## MAIN CONTENT and ## SUPPLEMENTARY CONTENT?
- Is the H2/H3 hierarchy correct and not collapsed?

5: OVERALL QUALITY
- Logical, easy to follow, tightly linked, sensible H2/H3 ordering?
- Demonstrates depth, builds authority, balances basics and depth?
- Reflects the search intent, helps Google understand the content, covers macro and micro semantics?";

/// Writing-optimization checklist sent with every evaluation request.
pub const WRITING_RUBRIC: &str = "\
PART 3: WRITING OPTIMIZATION CHECKLIST
- Rules: 40-word featured snippet, Answer Boolean Questions (repeat 3 times as required), \
Answering Short vs Long Form, Author Rules, Avoid Analogies, Avoid Confusing Users or Bots, \
Avoid Copy Pasting Questions, Avoid Coreference Error, Avoid Entities Stuffing, \
Avoid Everyday Language (repeat 2 times), Avoid Linking to Citations, Avoid Opinion, \
Avoid Product Promotion, Avoid Uncertain Words, Avoid Unnecessary Sentences, Be Certain, \
Be Specific, Bold the Answer Section, Choose Predicates Wisely, Citing Authoritative Sources, \
Consistent Declarations, Consistent Document Style, Consistent Part of Speech, \
Content Length Rules, Context Vector Hierarchy, Cut the Fluff, \
Discourse Integration Optimization, Enhance Paragraph Perspective, Entities not Keywords, \
Expand Evidence, Factual Sentence, Fewer Links, Give Examples After Plural Nouns, \
Google Fact Verification, Grammar & Spelling, How to Answer Type/Listing Questions, \
Importance of TOC, Key Term in Title & Heading, Long Form Answering, Maintain Context, \
Maintain Information Graph, Match Anchor Text, Match Tenses Modality, Mention Studies, \
More Information per Section, Optimize Content for NLP, \
Optimize Subordinate Text's First Sentence, Parts of Speech, \
Placement of 'if' in Second Statement (repeat 2 times), Prioritize Attributes & Contexts, \
Provide Safe Answers, Reduce Contextless Words, Relevance Configuration, Same N-Grams, \
Sentence Context, Single Macro Context, Single Topic with Every Detail, Table Context, \
Timely Answer Delivery, Topic in Q/A Format, Truth Ranges, Unique N-Grams, \
Use Abbreviations, Use Diverse Measurement Units, Use Entities/Attributes/N-Grams, \
Use Numeric Values, Use Ordered/Unordered Lists, Use Shorter Sentences, \
Using Research Papers.

CHAIN CLUSTERS:
- Cluster 1: Title -> Lede -> H2 -> Answer under the H2 -> Transition sentence
- Cluster 2: Lede -> H2 answer -> H3 -> H3 answer -> H3 transition sentence
- Cluster 3: H3 answer -> Details developing the H3 answer";

/// Transport seam for the remote evaluator.
///
/// Implementors send one prompt and return the raw response text. Failures
/// surface as [`Error::EvaluatorUnavailable`]; callers going through
/// [`evaluate_or_fallback`] never see them.
pub trait Evaluate {
    /// Send one evaluation prompt, returning the model's raw text response.
    fn evaluate(&self, prompt: &str) -> Result<String>;
}

/// Assemble the full evaluation prompt for one audit input.
#[must_use]
pub fn build_prompt(input: &AuditInput) -> String {
    format!(
        "You are a senior semantic SEO expert. Assess the article and its \
outline against the following checklists:\n\n\
MAIN KEYWORD: {keyword}\n\
URL: {url}\n\
OUTLINE: {outline}\n\
CONTENT: {content}\n\n\
--- {outline_rubric} ---\n\n\
--- {writing_rubric} ---\n\n\
--- OUTPUT REQUIREMENTS (JSON) ---\n\
1. Review EVERY criterion in the checklists above.\n\
2. Return the result as JSON.\n\
3. IMPORTANT: each check's \"description\" field must be an in-depth \
analysis of at least 300 words.\n\
4. Explain why the criterion matters for semantic SEO and how to fix it \
using the data supplied above.\n\n\
{{\n\
  \"outlineChecks\": [{{ \"id\": string, \"label\": string, \"status\": \"passed\" | \"failed\" | \"warning\", \"message\": string, \"description\": string }}],\n\
  \"writingChecks\": [{{ \"id\": string, \"label\": string, \"status\": \"passed\" | \"failed\" | \"warning\", \"message\": string, \"description\": string }}],\n\
  \"scores\": {{ \"overall\": number, \"onpage\": number, \"outline\": number, \"writing\": number }},\n\
  \"strategicFeedback\": {{ \"pros\": string[], \"cons\": string[], \"summary\": string }}\n\
}}",
        keyword = input.main_keyword,
        url = input.url,
        outline = input.outline,
        content = input.content,
        outline_rubric = OUTLINE_RUBRIC,
        writing_rubric = WRITING_RUBRIC,
    )
}

/// Decode a raw evaluator response against the report schema.
///
/// Every schema field is defaulted, so any JSON object decodes; only
/// non-JSON input errors.
pub fn decode_response(text: &str) -> Result<AiReport> {
    serde_json::from_str(text).map_err(|e| Error::EvaluatorResponse(e.to_string()))
}

/// Decode a raw response, substituting the neutral fallback on any failure.
#[must_use]
pub fn decode_response_or_fallback(text: &str) -> AiReport {
    decode_response(text).unwrap_or_else(|_| AiReport::fallback())
}

/// Run one evaluation through a transport, absorbing every failure mode
/// (call failure, malformed response) into the neutral fallback report.
pub fn evaluate_or_fallback<E: Evaluate>(evaluator: &E, input: &AuditInput) -> AiReport {
    let prompt = build_prompt(input);
    match evaluator.evaluate(&prompt) {
        Ok(text) => decode_response_or_fallback(&text),
        Err(_) => AiReport::fallback(),
    }
}
