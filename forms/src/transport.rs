//! HTTP seam between the submitters and whatever can send a request.

use std::future::Future;

use crate::error::FormError;

/// Status and resolved body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResponse {
    pub status: u16,
    pub body: String,
}

impl FormResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a URL-encoded body with `POST` to a path on the backend.
///
/// `endpoint` is always a path such as [`MESSAGE_ENDPOINT`](crate::MESSAGE_ENDPOINT);
/// resolving it against an origin is the implementation's job.
pub trait FormTransport {
    fn post_form(&self, endpoint: &str, body: String) -> impl Future<Output = Result<FormResponse, FormError>>;
}
