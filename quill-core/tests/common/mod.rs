//! Shared test doubles

use async_trait::async_trait;
use quill_core::llm::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the fake provider answers with
pub enum Reply {
    Text(&'static str),
    /// Partial text cut off by the output limit
    Truncated(&'static str),
    NoText,
    Fail,
}

/// Provider that records every request and answers with a canned reply
pub struct RecordingProvider {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<LLMRequest>>,
}

impl RecordingProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl LLMProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);

        match self.reply {
            Reply::Text(text) => Ok(LLMResponse::text(text)),
            Reply::Truncated(text) => Ok(LLMResponse {
                content: Some(text.to_string()),
                finish_reason: FinishReason::Length,
            }),
            Reply::NoText => Ok(LLMResponse::empty()),
            Reply::Fail => Err(LLMError::Authentication("API key not valid".to_string())),
        }
    }
}
