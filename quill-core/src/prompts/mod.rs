//! Prompt assembly for content generation
//!
//! [`compiler`] renders a request into the instruction sent to the model;
//! [`mock`] renders the placeholder text used when no provider is configured.
//! Both are pure and total.

pub mod compiler;
pub mod mock;

pub use compiler::{authoring_instruction, compile};
pub use mock::synthesize;
