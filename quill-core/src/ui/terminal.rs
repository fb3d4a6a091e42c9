use crate::generation::OutputSink;
use crate::ui::Spinner;

/// [`OutputSink`] for the terminal: shows a spinner while generating and
/// keeps the latest output for printing once generation ends.
pub struct TerminalSink {
    message: String,
    interactive: bool,
    spinner: Option<Spinner>,
    output: String,
}

impl TerminalSink {
    /// `interactive` controls whether the spinner is drawn
    pub fn new(message: impl Into<String>, interactive: bool) -> Self {
        Self {
            message: message.into(),
            interactive,
            spinner: None,
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_generating(&self) -> bool {
        self.spinner.is_some()
    }
}

impl OutputSink for TerminalSink {
    fn generating_changed(&mut self, generating: bool) {
        if generating {
            let spinner = if self.interactive {
                Spinner::new(&self.message)
            } else {
                Spinner::hidden()
            };
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn output_changed(&mut self, output: &str) {
        self.output = output.to_string();
    }
}
