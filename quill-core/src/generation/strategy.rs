use crate::config::constants::generation;
use crate::content::ContentRequest;
use crate::llm::{FinishReason, LLMError, LLMProvider, LLMRequest};
use crate::prompts;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Which strategy a dispatcher was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    Live,
    Mock,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Live => f.write_str("live"),
            GenerationMode::Mock => f.write_str("mock"),
        }
    }
}

/// Failure of a live generation.
///
/// Provider errors are flattened into text so their types stay inside the
/// `llm` layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("generation provider failed: {0}")]
    Provider(String),
}

impl From<LLMError> for GenerationError {
    fn from(err: LLMError) -> Self {
        GenerationError::Provider(err.to_string())
    }
}

/// One way of turning a compiled prompt into content
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn mode(&self) -> GenerationMode;

    /// Produce content for `request`. `prompt` is the already compiled prompt.
    async fn generate_text(
        &self,
        request: &ContentRequest,
        prompt: &str,
    ) -> Result<String, GenerationError>;
}

/// Offline placeholder generation. Never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStrategy;

#[async_trait]
impl GenerationStrategy for MockStrategy {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Mock
    }

    async fn generate_text(
        &self,
        request: &ContentRequest,
        _prompt: &str,
    ) -> Result<String, GenerationError> {
        Ok(prompts::synthesize(request))
    }
}

/// Generation through a hosted provider.
///
/// Issues exactly one provider call per invocation, with no retry and no
/// timeout. Missing response text becomes an empty string.
pub struct LiveStrategy {
    provider: Arc<dyn LLMProvider>,
    model: String,
    temperature: f32,
}

impl LiveStrategy {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: generation::TEMPERATURE,
        }
    }
}

#[async_trait]
impl GenerationStrategy for LiveStrategy {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Live
    }

    async fn generate_text(
        &self,
        _request: &ContentRequest,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let request =
            LLMRequest::new(prompt, self.model.clone()).with_temperature(self.temperature);
        info!(
            provider = self.provider.name(),
            model = %self.model,
            "requesting live generation"
        );

        let response = self.provider.generate(request).await.map_err(|err| {
            error!(provider = self.provider.name(), error = %err, "live generation failed");
            GenerationError::from(err)
        })?;

        if response.finish_reason != FinishReason::Stop {
            debug!(
                provider = self.provider.name(),
                finish_reason = ?response.finish_reason,
                "generation stopped early"
            );
        }

        Ok(response.content.unwrap_or_default())
    }
}
