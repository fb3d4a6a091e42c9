//! Content request and result types
//!
//! A [`ContentRequest`] is built once per generation, handed to the prompt
//! compiler and the dispatcher by reference, and never patched afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of text to produce.
///
/// Unrecognized wire values are kept verbatim in [`ContentType::Other`] so the
/// compiler and the mock synthesizer can apply their own fallbacks instead of
/// rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    BlogPost,
    SocialMediaUpdate,
    EmailDraft,
    ProductDescription,
    Other(String),
}

impl ContentType {
    /// All recognized content types, in menu order
    pub const ALL: [ContentType; 4] = [
        ContentType::BlogPost,
        ContentType::SocialMediaUpdate,
        ContentType::ProductDescription,
        ContentType::EmailDraft,
    ];

    /// Wire identifier, e.g. `blog_post`
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::BlogPost => "blog_post",
            ContentType::SocialMediaUpdate => "social_media_update",
            ContentType::EmailDraft => "email_draft",
            ContentType::ProductDescription => "product_description",
            ContentType::Other(value) => value,
        }
    }

    /// Human readable label shown in menus
    pub fn label(&self) -> &str {
        match self {
            ContentType::BlogPost => "Blog Post Outline",
            ContentType::SocialMediaUpdate => "Social Media Captions",
            ContentType::EmailDraft => "Email Draft",
            ContentType::ProductDescription => "Product Description",
            ContentType::Other(value) => value,
        }
    }

    /// Known variant for this wire identifier, if any.
    ///
    /// Decided by [`as_str`](Self::as_str), so `Other("blog_post")` maps to
    /// `BlogPost`.
    pub fn canonical(&self) -> Option<ContentType> {
        match ContentType::from(self.as_str()) {
            ContentType::Other(_) => None,
            known => Some(known),
        }
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        match value {
            "blog_post" => ContentType::BlogPost,
            "social_media_update" => ContentType::SocialMediaUpdate,
            "email_draft" => ContentType::EmailDraft,
            "product_description" => ContentType::ProductDescription,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        ContentType::from(value.as_str())
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        match value {
            ContentType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ContentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContentType::from(s))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice the generated text should use. Interpolated as text, never branched on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    #[default]
    Casual,
    Humorous,
    Persuasive,
}

impl Tone {
    /// All tones, in menu order
    pub const ALL: [Tone; 4] = [Tone::Persuasive, Tone::Casual, Tone::Humorous, Tone::Formal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Persuasive => "persuasive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Humorous => "Humorous",
            Tone::Persuasive => "Persuasive",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection reasons for requests that callers must not forward to the core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("topic must not be empty")]
    EmptyTopic,
}

/// Description of the text a caller wants generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub topic: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl ContentRequest {
    pub fn new(topic: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            topic: topic.into(),
            content_type,
            tone: None,
            keywords: None,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// The explicit tone, or [`Tone::Casual`] when none was given
    pub fn resolved_tone(&self) -> Tone {
        self.tone.unwrap_or_default()
    }

    /// Keywords that should be echoed into prompts and mock output.
    ///
    /// Present-but-empty keywords count as absent; whitespace is kept as is.
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref().filter(|k| !k.is_empty())
    }

    /// Presence check performed by callers before dispatching
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        Ok(())
    }
}

/// Output of one generation, live or mock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub generated_content: String,
    /// Exact prompt that was compiled for this request
    pub prompt_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_and_unknown_content_types() {
        assert_eq!(ContentType::from("blog_post"), ContentType::BlogPost);
        assert_eq!(
            "social_media_update".parse::<ContentType>().unwrap(),
            ContentType::SocialMediaUpdate
        );
        let unknown = ContentType::from("unknown_type");
        assert_eq!(unknown, ContentType::Other("unknown_type".to_string()));
        assert_eq!(unknown.as_str(), "unknown_type");
        assert_eq!(unknown.canonical(), None);
    }

    #[test]
    fn recognition_is_decided_by_wire_identifier() {
        let spelled_out = ContentType::Other("email_draft".to_string());
        assert_eq!(spelled_out.canonical(), Some(ContentType::EmailDraft));
        assert_eq!(ContentType::from("Email_Draft").canonical(), None);
    }

    #[test]
    fn missing_tone_defaults_to_casual() {
        let request = ContentRequest::new("launch", ContentType::EmailDraft);
        assert_eq!(request.resolved_tone(), Tone::Casual);
        assert_eq!(
            request.with_tone(Tone::Formal).resolved_tone(),
            Tone::Formal
        );
    }

    #[test]
    fn empty_keywords_are_treated_as_absent() {
        let request = ContentRequest::new("launch", ContentType::BlogPost).with_keywords("");
        assert_eq!(request.keywords(), None);

        let spaced = ContentRequest::new("launch", ContentType::BlogPost).with_keywords("  ");
        assert_eq!(spaced.keywords(), Some("  "));
    }

    #[test]
    fn validate_rejects_blank_topic() {
        let request = ContentRequest::new("   ", ContentType::BlogPost);
        assert_eq!(request.validate(), Err(ValidationError::EmptyTopic));
        assert!(
            ContentRequest::new("coffee", ContentType::BlogPost)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let payload = r#"{
            "topic": "eco bags",
            "contentType": "social_media_update",
            "tone": "humorous",
            "keywords": "sustainable,reusable"
        }"#;
        let request: ContentRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(request.content_type, ContentType::SocialMediaUpdate);
        assert_eq!(request.tone, Some(Tone::Humorous));
        assert_eq!(request.keywords(), Some("sustainable,reusable"));

        let minimal: ContentRequest =
            serde_json::from_str(r#"{"topic": "x", "contentType": "poem"}"#).unwrap();
        assert_eq!(minimal.content_type, ContentType::Other("poem".to_string()));
        assert_eq!(minimal.tone, None);
    }
}
