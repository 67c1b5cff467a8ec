//! Map a submission outcome to CLI output and exit status.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use forms::SubmitOutcome;

use crate::error::CliError;

/// Result of a single-shot command.
///
/// Skips are not failures: they mirror the browser, where a guarded submit
/// does nothing.
pub fn report(endpoint: &'static str, outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Accepted => {
            tracing::info!(endpoint, "accepted");
            Ok(())
        }
        SubmitOutcome::Skipped(reason) => {
            tracing::warn!(endpoint, ?reason, "nothing sent");
            Ok(())
        }
        SubmitOutcome::Superseded => Ok(()),
        SubmitOutcome::Rejected { status } => Err(CliError::Rejected { endpoint, status }),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}

/// Log an outcome inside the `chat` loop, which never stops on a bad line.
pub fn log_line(line_no: usize, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted => tracing::debug!(line_no, "message accepted"),
        SubmitOutcome::Skipped(reason) => tracing::debug!(line_no, ?reason, "line skipped"),
        SubmitOutcome::Superseded => {}
        SubmitOutcome::Rejected { status } => tracing::warn!(line_no, status, "message rejected"),
        SubmitOutcome::Failed(e) => tracing::warn!(line_no, error = %e, "message not delivered"),
    }
}
