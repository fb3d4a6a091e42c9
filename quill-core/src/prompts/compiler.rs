//! Request-to-prompt compiler
//!
//! Clause order is fixed: base, tone, keywords, then the content-type
//! instruction. Downstream tooling matches on the literal phrases.

use crate::content::{ContentRequest, ContentType};
use tracing::debug;

/// Authoring instruction appended for each recognized content type
const AUTHORING_INSTRUCTIONS: &[(&str, &str)] = &[
    (
        "blog_post",
        "The blog post should be engaging, well-structured with a clear introduction, body, and conclusion. Aim for around 500-800 words.",
    ),
    (
        "social_media_update",
        "Keep it concise and engaging for social media. Include relevant hashtags if possible. Max 280 characters.",
    ),
    (
        "email_draft",
        "Draft a professional email. Include a subject line, greeting, body, and closing.",
    ),
    (
        "product_description",
        "Write a compelling product description highlighting key features and benefits.",
    ),
];

/// Look up the instruction for a content type.
///
/// Keyed on the exact wire identifier. Anything outside the table compiles to
/// a prompt without a fourth clause.
pub fn authoring_instruction(content_type: &ContentType) -> Option<&'static str> {
    AUTHORING_INSTRUCTIONS
        .iter()
        .find(|(id, _)| *id == content_type.as_str())
        .map(|(_, instruction)| *instruction)
}

/// Render a request into the prompt sent to the generation provider
pub fn compile(request: &ContentRequest) -> String {
    let mut prompt = format!(
        "Generate a {} about \"{}\".",
        request.content_type, request.topic
    );

    prompt.push_str(&format!(" The tone should be {}.", request.resolved_tone()));

    if let Some(keywords) = request.keywords() {
        prompt.push_str(&format!(" Please incorporate the following keywords: {keywords}."));
    }

    if let Some(instruction) = authoring_instruction(&request.content_type) {
        prompt.push(' ');
        prompt.push_str(instruction);
    }

    debug!(content_type = %request.content_type, prompt = %prompt, "compiled prompt");
    prompt
}
