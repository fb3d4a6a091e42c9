//! # LLM Integration Layer
//!
//! A small provider abstraction: one [`LLMProvider`] trait carrying a single
//! prompt-in, text-out call, and the [`GeminiProvider`] adapter that speaks
//! the Gemini `generateContent` REST API.
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use quill_core::llm::{GeminiProvider, LLMError, LLMProvider, LLMRequest};
//!
//! # async fn run() {
//! let provider = GeminiProvider::new("your-api-key".to_string());
//! let request = LLMRequest::new("Generate a blog_post about \"tea\".", "gemini-2.5-flash");
//!
//! match provider.generate(request).await {
//!     Ok(response) => println!("{}", response.content.unwrap_or_default()),
//!     Err(LLMError::Authentication(e)) => eprintln!("Authentication failed: {e}"),
//!     Err(LLMError::RateLimit) => eprintln!("Rate limit exceeded"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # }
//! ```

pub mod error_display;
pub mod provider;
pub mod providers;

pub use provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse};
pub use providers::GeminiProvider;
