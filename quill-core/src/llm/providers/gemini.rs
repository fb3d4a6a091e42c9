use crate::config::constants::{models, urls};
use crate::llm::provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::debug;

/// Gemini `generateContent` adapter.
///
/// The HTTP client is built without a request timeout; callers that need one
/// drop the returned future.
pub struct GeminiProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, models::google::DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::GEMINI_API_BASE.to_string(),
            model,
        }
    }

    pub fn from_config(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        let mut provider = match model {
            Some(model_value) => Self::with_model(api_key, model_value),
            None => Self::new(api_key),
        };
        if let Some(base) = base_url {
            provider.base_url = base.trim_end_matches('/').to_string();
        }
        provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        let gemini_request = convert_to_gemini_format(&request);
        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!(%url, "sending Gemini generateContent request");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_http_error(status, error_text));
        }

        let gemini_response: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("Failed to parse response: {e}")))?;

        convert_from_gemini_format(&gemini_response)
    }
}

fn classify_http_error(status: StatusCode, error_text: String) -> LLMError {
    let lowered = error_text.to_lowercase();
    if status == StatusCode::TOO_MANY_REQUESTS
        || lowered.contains("quota")
        || lowered.contains("rate limit")
    {
        return LLMError::RateLimit;
    }

    match status.as_u16() {
        401 | 403 => LLMError::Authentication(format!("HTTP {status}: {error_text}")),
        400 | 404 => LLMError::InvalidRequest(format!("HTTP {status}: {error_text}")),
        _ => LLMError::Provider(format!("HTTP {status}: {error_text}")),
    }
}

/// Build the request body: the prompt as the only user content plus the
/// sampling configuration.
pub(crate) fn convert_to_gemini_format(request: &LLMRequest) -> Value {
    let mut gemini_request = json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": request.prompt}]
        }]
    });

    if let Some(temperature) = request.temperature {
        gemini_request["generationConfig"] = json!({ "temperature": temperature });
    }

    gemini_request
}

/// Extract the text of the first candidate.
///
/// Missing candidates, content, or text parts are not errors: they produce a
/// response with `content: None`.
pub(crate) fn convert_from_gemini_format(response: &Value) -> Result<LLMResponse, LLMError> {
    if !response.is_object() {
        return Err(LLMError::Provider("Gemini response is not a JSON object".to_string()));
    }

    let Some(candidate) = response["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
    else {
        return Ok(LLMResponse::empty());
    };

    let text_content: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    let finish_reason = match candidate["finishReason"].as_str() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") => FinishReason::ContentFilter,
        Some(other) => FinishReason::Error(other.to_string()),
    };

    Ok(LLMResponse {
        content: if text_content.is_empty() {
            None
        } else {
            Some(text_content)
        },
        finish_reason,
    })
}
