//! Chat message form: `room`, `username`, `message` to `/message`.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::MESSAGE_ENDPOINT;
use crate::field::FormField;
use crate::generation::{CompletionPolicy, RequestGeneration};
use crate::outcome::{SkipReason, SubmitOutcome, settle};
use crate::payload::OutgoingMessage;
use crate::session::Session;
use crate::transport::FormTransport;

/// Submits the message form and clears the message field on success.
///
/// Cloning is cheap and clones share the session, the fields and the
/// generation counter, so a clone can be moved into a spawned task.
#[derive(Clone, Debug)]
pub struct MessageSubmitter<F, T> {
    session: Session,
    message: F,
    username: F,
    transport: T,
    generation: RequestGeneration,
    policy: CompletionPolicy,
}

impl<F: FormField, T: FormTransport> MessageSubmitter<F, T> {
    pub fn new(session: Session, message: F, username: F, transport: T) -> Self {
        Self {
            session,
            message,
            username,
            transport,
            generation: RequestGeneration::new(),
            policy: CompletionPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn message_field(&self) -> &F {
        &self.message
    }

    pub fn username_field(&self) -> &F {
        &self.username
    }

    /// Read the fields and apply both guards.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] of the first guard that fails.
    pub fn prepare(&self) -> Result<OutgoingMessage, SkipReason> {
        let outgoing = OutgoingMessage::from_inputs(self.session.room(), self.username.value(), self.message.value());

        if outgoing.message.is_empty() {
            return Err(SkipReason::EmptyMessage);
        }
        // Unreachable while `from_inputs` defaults the username; see DESIGN.md.
        if outgoing.username.is_empty() {
            return Err(SkipReason::EmptyUsername);
        }
        if !self.session.is_connected() {
            return Err(SkipReason::Disconnected);
        }
        Ok(outgoing)
    }

    /// Run one submission to completion.
    pub async fn submit(&self) -> SubmitOutcome {
        let outgoing = match self.prepare() {
            Ok(outgoing) => outgoing,
            Err(reason) => {
                log::debug!("message submit skipped: {reason:?}");
                return SubmitOutcome::Skipped(reason);
            }
        };
        let body = match outgoing.encode() {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::Failed(e),
        };

        let ticket = self.generation.issue();
        let result = self.transport.post_form(MESSAGE_ENDPOINT, body).await;

        settle(MESSAGE_ENDPOINT, result, &self.generation, self.policy, ticket, || {
            self.message.clear();
        })
    }
}
