//! Offline placeholder content
//!
//! Used by the mock generation strategy so the CLI works without an API key
//! or billing. Output is labeled "Mock" and never empty.

use crate::content::{ContentRequest, ContentType};

/// Produce placeholder text shaped like live output for `request`
pub fn synthesize(request: &ContentRequest) -> String {
    let topic = &request.topic;
    let tone = request.resolved_tone();

    let canonical = request.content_type.canonical();
    let mut content = match canonical.as_ref().unwrap_or(&request.content_type) {
        ContentType::BlogPost => format!(
            "Mock blog post about \"{topic}\". This is an example introduction followed by a body and a conclusion. Tone: {tone}."
        ),
        ContentType::SocialMediaUpdate => {
            format!("Mock social update: {topic} — concise and engaging. Tone: {tone}.")
        }
        ContentType::EmailDraft => format!(
            "Subject: Mock email about {topic}\n\nHello,\n\nThis is a mock email body written in a {tone} tone.\n\nRegards,\nTeam"
        ),
        ContentType::ProductDescription => format!(
            "Mock product description for {topic}. Highlights: features and benefits in a {tone} tone."
        ),
        ContentType::Other(kind) => {
            format!("Mock content for {topic} (type: {kind}). Tone: {tone}.")
        }
    };

    if let Some(keywords) = request.keywords() {
        content.push_str(&format!("\n\nKeywords: {keywords}"));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Tone;

    #[test]
    fn social_update_echoes_topic_tone_and_keywords() {
        let request = ContentRequest::new("eco bags", ContentType::SocialMediaUpdate)
            .with_tone(Tone::Humorous)
            .with_keywords("sustainable,reusable");
        let content = synthesize(&request);

        assert!(content.contains("eco bags"));
        assert!(content.contains("humorous"));
        assert!(content.ends_with("Keywords: sustainable,reusable"));
    }

    #[test]
    fn email_draft_uses_letter_layout() {
        let content = synthesize(&ContentRequest::new("the launch", ContentType::EmailDraft));
        assert!(content.starts_with("Subject: Mock email about the launch\n\nHello,"));
        assert!(content.contains("written in a casual tone"));
        assert!(content.ends_with("Regards,\nTeam"));
    }

    #[test]
    fn unknown_type_uses_generic_fallback() {
        let request = ContentRequest::new("spring sale", ContentType::from("unknown_type"));
        assert_eq!(
            synthesize(&request),
            "Mock content for spring sale (type: unknown_type). Tone: casual."
        );
    }

    #[test]
    fn every_type_yields_non_empty_text() {
        let mut types = ContentType::ALL.to_vec();
        types.push(ContentType::from(""));
        for content_type in types {
            let request = ContentRequest::new("x", content_type);
            assert!(!synthesize(&request).is_empty());
        }
    }

    #[test]
    fn empty_keywords_add_no_trailer() {
        let request =
            ContentRequest::new("mugs", ContentType::ProductDescription).with_keywords("");
        assert!(!synthesize(&request).contains("Keywords:"));
    }

    #[test]
    fn spelled_out_known_type_uses_its_template() {
        let request = ContentRequest::new("mugs", ContentType::Other("product_description".into()));
        assert_eq!(
            synthesize(&request),
            synthesize(&ContentRequest::new("mugs", ContentType::ProductDescription))
        );
    }
}
