//! What a single submission ended up doing.

use crate::error::FormError;
use crate::generation::{CompletionPolicy, RequestGeneration, Ticket};
use crate::transport::FormResponse;

/// Why no request was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    EmptyMessage,
    EmptyUsername,
    Disconnected,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A guard stopped the submission before any request.
    Skipped(SkipReason),
    /// 2xx response; the success side effect was applied.
    Accepted,
    /// Non-2xx response; the field was left alone.
    Rejected { status: u16 },
    /// A newer request was issued before this one completed
    /// (only under [`CompletionPolicy::LatestOnly`]).
    Superseded,
    /// No response at all.
    Failed(FormError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Resolve a finished request into an outcome, running `on_success` only for
/// an admitted 2xx completion.
pub(crate) fn settle(
    endpoint: &str,
    result: Result<FormResponse, FormError>,
    generation: &RequestGeneration,
    policy: CompletionPolicy,
    ticket: Ticket,
    on_success: impl FnOnce(),
) -> SubmitOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::warn!("POST {endpoint} failed: {e}");
            return SubmitOutcome::Failed(e);
        }
    };

    log::debug!("POST {endpoint} -> {}: {}", response.status, response.body);

    if !generation.admits(policy, ticket) {
        log::debug!("POST {endpoint} completion #{} superseded", ticket.get());
        return SubmitOutcome::Superseded;
    }

    if response.is_success() {
        on_success();
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected { status: response.status }
    }
}
