//! Fire-and-report boundary for interactive callers
//!
//! Interactive frontends have one output area and one busy indicator. This
//! module drives both through an [`OutputSink`]: the busy flag is raised
//! before dispatch and always lowered afterwards, and any failure is reported
//! as [`GENERIC_ERROR_MESSAGE`] instead of being returned.
//!
//! [`GENERIC_ERROR_MESSAGE`]: crate::config::constants::generation::GENERIC_ERROR_MESSAGE

use crate::config::constants::generation::GENERIC_ERROR_MESSAGE;
use crate::content::{ContentRequest, GenerationResult};
use crate::generation::Dispatcher;
use tracing::{debug, error};

/// Receiver for the two signals a generation emits
pub trait OutputSink {
    /// Busy indicator changed
    fn generating_changed(&mut self, generating: bool);

    /// Text to show in the output area
    fn output_changed(&mut self, output: &str);
}

/// Explicit caller-side state: the busy flag and the current output text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub generating: bool,
    pub output: String,
}

impl OutputSink for GenerationState {
    fn generating_changed(&mut self, generating: bool) {
        self.generating = generating;
    }

    fn output_changed(&mut self, output: &str) {
        self.output = output.to_string();
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The topic was blank; nothing was dispatched or signaled
    Skipped,
    Completed(GenerationResult),
    /// The failure was already reported through the sink
    Failed,
}

impl Dispatcher {
    /// Run one generation for an interactive caller.
    ///
    /// Blank topics are ignored. Otherwise the sink sees
    /// `generating_changed(true)`, `output_changed("")`, then either the
    /// generated content or the generic error message, then
    /// `generating_changed(false)`.
    pub async fn submit(
        &self,
        request: &ContentRequest,
        sink: &mut dyn OutputSink,
    ) -> SubmitOutcome {
        if request.validate().is_err() {
            debug!("ignoring submission with an empty topic");
            return SubmitOutcome::Skipped;
        }

        sink.generating_changed(true);
        sink.output_changed("");

        let outcome = match self.generate(request).await {
            Ok(result) => {
                sink.output_changed(&result.generated_content);
                SubmitOutcome::Completed(result)
            }
            Err(err) => {
                error!(error = %err, "error generating content");
                sink.output_changed(GENERIC_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        };

        sink.generating_changed(false);
        outcome
    }
}
