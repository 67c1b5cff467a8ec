//! Error type shared by every form transport.

/// Why a submission produced no HTTP response.
///
/// A non-2xx status is not an error here; it is reported as
/// [`SubmitOutcome::Rejected`](crate::SubmitOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The payload could not be serialized as a URL-encoded body.
    #[error("failed to encode form body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
    /// The request never reached the server or the response was unreadable.
    #[error("request failed: {0}")]
    Network(String),
    /// No transport exists in this environment (e.g. server-side rendering).
    #[error("form transport not available in this environment")]
    Unavailable,
}
