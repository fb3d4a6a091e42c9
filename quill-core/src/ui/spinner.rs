//! Loading spinner utilities for terminal UI using indicatif crate

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// A wrapper around indicatif's ProgressBar for easy spinner management
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message, drawn on stderr
    pub fn new(message: &str) -> Self {
        Self::with_target(message, ProgressDrawTarget::stderr())
    }

    /// Spinner that draws nothing, for non-interactive output
    pub fn hidden() -> Self {
        Self::with_target("", ProgressDrawTarget::hidden())
    }

    fn with_target(message: &str, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(None, target);
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.tick();

        Self { pb }
    }

    /// Finish the spinner and clear the line
    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
