//! Prompt constants for copy generation.
//!
//! The output contract is labeled plain-text sections rather than JSON: the
//! template demands the four labels verbatim, and the parser tolerates
//! whatever the model actually returns.

use crate::generation::tone::ToneCategory;

/// System prompt for all copy generation calls.
pub const COPY_SYSTEM: &str = "You are a professional marketing copywriter who creates \
    compelling, brand-appropriate ad copy. \
    You MUST structure your response as exactly four labeled sections, \
    each starting on its own line with the label followed by a colon: \
    HEADLINE, DESCRIPTION, HASHTAGS, CALL TO ACTION. \
    Do NOT add any text before the first label or after the last section.";

/// User prompt template. Replace `{brand}`, `{product}`, `{audience}`, `{tone}`.
const COPY_PROMPT_TEMPLATE: &str = r#"Generate marketing content for the following:

Brand Name: {brand}
Product/Service Description: {product}
Target Audience: {audience}

The tone should be {tone}.

Please provide:
HEADLINE: a short, catchy ad headline (maximum 10 words)
DESCRIPTION: a marketing description (2-3 sentences highlighting key benefits)
HASHTAGS: three relevant hashtags
CALL TO ACTION: a compelling call-to-action phrase"#;

/// Deterministic substitution of the request fields into the fixed template.
pub fn build_prompt(brand: &str, product: &str, audience: &str, tone: ToneCategory) -> String {
    COPY_PROMPT_TEMPLATE
        .replace("{brand}", brand)
        .replace("{product}", product)
        .replace("{audience}", audience)
        .replace("{tone}", &tone.to_string())
}
