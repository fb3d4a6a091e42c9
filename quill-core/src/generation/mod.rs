//! Content generation
//!
//! A [`Dispatcher`] owns exactly one [`GenerationStrategy`], chosen when it is
//! built: [`LiveStrategy`] when an API key is configured, [`MockStrategy`]
//! otherwise. The choice never changes for the dispatcher's lifetime, and the
//! dispatcher holds no mutable state, so it can be cloned and shared across
//! tasks freely.

pub mod dispatcher;
pub mod session;
pub mod strategy;

pub use dispatcher::Dispatcher;
pub use session::{GenerationState, OutputSink, SubmitOutcome};
pub use strategy::{
    GenerationError, GenerationMode, GenerationStrategy, LiveStrategy, MockStrategy,
};
