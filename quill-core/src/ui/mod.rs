//! Terminal presentation helpers

pub mod spinner;
pub mod terminal;

pub use spinner::Spinner;
pub use terminal::TerminalSink;
