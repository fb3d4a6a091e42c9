//! # quill-core - Runtime for quill
//!
//! `quill-core` turns a small structured content request (topic, content
//! type, tone, keywords) into a prompt for a hosted text-generation model and
//! dispatches it, or synthesizes a clearly-labeled placeholder when no API key
//! is configured.
//!
//! ## Architecture Overview
//!
//! - `content/`: request and result types shared by every layer.
//! - `prompts/`: the pure prompt compiler and the offline mock synthesizer.
//! - `llm/`: provider trait and the Gemini HTTP adapter.
//! - `generation/`: live and mock strategies, the dispatcher, and the
//!   fire-and-report session boundary used by interactive callers.
//! - `config/`: `quill.toml` loading, constants, and API key resolution.
//! - `cli/` and `ui/`: the terminal collaborator driving the core.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use quill_core::content::{ContentRequest, ContentType, Tone};
//! use quill_core::generation::Dispatcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     // No API key: the dispatcher runs in mock mode for its whole lifetime.
//!     let dispatcher = Dispatcher::mock();
//!
//!     let request = ContentRequest::new("eco bags", ContentType::SocialMediaUpdate)
//!         .with_tone(Tone::Humorous)
//!         .with_keywords("sustainable,reusable");
//!
//!     let result = dispatcher.generate(&request).await?;
//!     println!("{}", result.generated_content);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod generation;
pub mod llm;
pub mod prompts;
pub mod ui;

pub use content::{ContentRequest, ContentType, GenerationResult, Tone};
pub use generation::{Dispatcher, GenerationMode};
