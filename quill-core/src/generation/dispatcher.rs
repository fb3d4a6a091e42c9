use crate::config::{ProviderConfig, QuillConfig, resolve_api_key};
use crate::content::{ContentRequest, GenerationResult};
use crate::generation::strategy::{
    GenerationError, GenerationMode, GenerationStrategy, LiveStrategy, MockStrategy,
};
use crate::llm::{GeminiProvider, LLMProvider};
use crate::prompts;
use std::sync::Arc;
use tracing::info;

/// Compiles requests and runs them through the strategy fixed at construction
#[derive(Clone)]
pub struct Dispatcher {
    strategy: Arc<dyn GenerationStrategy>,
}

impl Dispatcher {
    pub fn new(strategy: Arc<dyn GenerationStrategy>) -> Self {
        Self { strategy }
    }

    /// Dispatcher that only ever synthesizes placeholder content
    pub fn mock() -> Self {
        Self::new(Arc::new(MockStrategy))
    }

    /// Dispatcher that sends every prompt to `provider` using `model`
    pub fn live(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self::new(Arc::new(LiveStrategy::new(provider, model)))
    }

    /// Pick the strategy from an already resolved API key.
    ///
    /// `Some` selects the Gemini provider described by `provider_config`;
    /// `None` selects mock mode.
    pub fn from_api_key(api_key: Option<String>, provider_config: &ProviderConfig) -> Self {
        match api_key {
            Some(api_key) => {
                let provider = GeminiProvider::from_config(
                    api_key,
                    Some(provider_config.model.clone()),
                    Some(provider_config.base_url.clone()),
                );
                info!(model = %provider_config.model, "generation running in live mode");
                Self::live(Arc::new(provider), provider_config.model.clone())
            }
            None => {
                info!(
                    env = %provider_config.api_key_env,
                    "no API key found, generation running in mock mode"
                );
                Self::mock()
            }
        }
    }

    /// Resolve the API key from the environment and `config`, then pick the strategy
    pub fn from_config(config: &QuillConfig) -> Self {
        let api_key = resolve_api_key(&config.provider.api_key_sources());
        Self::from_api_key(api_key, &config.provider)
    }

    pub fn mode(&self) -> GenerationMode {
        self.strategy.mode()
    }

    /// Compile `request` and generate content for it.
    ///
    /// The prompt is always compiled first and returned alongside the
    /// content. Provider failures come back as [`GenerationError`].
    pub async fn generate(
        &self,
        request: &ContentRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let prompt_used = prompts::compile(request);
        let generated_content = self.strategy.generate_text(request, &prompt_used).await?;

        Ok(GenerationResult {
            generated_content,
            prompt_used,
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mode", &self.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentType, Tone};

    #[tokio::test]
    async fn mock_dispatcher_returns_prompt_and_placeholder() {
        let dispatcher = Dispatcher::mock();
        assert_eq!(dispatcher.mode(), GenerationMode::Mock);

        let request = ContentRequest::new("eco bags", ContentType::SocialMediaUpdate)
            .with_tone(Tone::Humorous)
            .with_keywords("sustainable,reusable");
        let result = dispatcher.generate(&request).await.unwrap();

        assert_eq!(result.prompt_used, prompts::compile(&request));
        assert!(result.generated_content.contains("eco bags"));
        assert!(result.generated_content.ends_with("Keywords: sustainable,reusable"));
    }

    #[test]
    fn api_key_presence_selects_mode() {
        let config = ProviderConfig::default();
        assert_eq!(
            Dispatcher::from_api_key(None, &config).mode(),
            GenerationMode::Mock
        );
        assert_eq!(
            Dispatcher::from_api_key(Some("key".to_string()), &config).mode(),
            GenerationMode::Live
        );
    }
}
