//! Blob ticket form: `message` to `/blob`.

#[cfg(test)]
#[path = "blob_test.rs"]
mod blob_test;

use crate::field::FormField;
use crate::generation::{CompletionPolicy, RequestGeneration};
use crate::outcome::{SubmitOutcome, settle};
use crate::payload::OutgoingBlob;
use crate::transport::FormTransport;
use crate::{BLOB_ENDPOINT, SUCCESS_CLASS};

/// Submits the blob form; on success clears the field and marks it with
/// [`SUCCESS_CLASS`]. There is no emptiness guard.
#[derive(Clone, Debug)]
pub struct BlobSubmitter<F, T> {
    field: F,
    transport: T,
    generation: RequestGeneration,
    policy: CompletionPolicy,
}

impl<F: FormField, T: FormTransport> BlobSubmitter<F, T> {
    pub fn new(field: F, transport: T) -> Self {
        Self {
            field,
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

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn prepare(&self) -> OutgoingBlob {
        OutgoingBlob { message: self.field.value() }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let body = match self.prepare().encode() {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::Failed(e),
        };

        let ticket = self.generation.issue();
        let result = self.transport.post_form(BLOB_ENDPOINT, body).await;

        settle(BLOB_ENDPOINT, result, &self.generation, self.policy, ticket, || {
            self.field.clear();
            self.field.set_class_name(SUCCESS_CLASS);
        })
    }
}
