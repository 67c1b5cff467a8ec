//! Shared form-submission core for the `/message` and `/blob` endpoints.
//!
//! This crate owns the behavior used by both `client` (browser) and `cli`
//! (terminal): reading typed fields, guarding, URL-encoding the payload,
//! posting it through a [`FormTransport`], and applying the success side
//! effect to the field. It has no DOM or HTTP dependency of its own.
//!
//! EXECUTION MODEL
//! ===============
//! Everything here is single-threaded. Shared handles are `Rc`-based and
//! the futures returned by the submitters are `!Send`; they are meant to be
//! driven by `spawn_local` in the browser or awaited directly elsewhere.

pub mod blob;
pub mod error;
pub mod field;
pub mod generation;
pub mod message;
pub mod outcome;
pub mod payload;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use blob::BlobSubmitter;
pub use error::FormError;
pub use field::{FormField, MemoryField};
pub use generation::{CompletionPolicy, RequestGeneration, Ticket};
pub use message::MessageSubmitter;
pub use outcome::{SkipReason, SubmitOutcome};
pub use payload::{OutgoingBlob, OutgoingMessage};
pub use session::{Session, SessionState};
pub use transport::{FormResponse, FormTransport};

/// Path of the chat message endpoint.
pub const MESSAGE_ENDPOINT: &str = "/message";

/// Path of the blob ticket endpoint.
pub const BLOB_ENDPOINT: &str = "/blob";

/// Content type sent with every form body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Class applied to the blob field after an accepted submission.
pub const SUCCESS_CLASS: &str = "textarea is-success";
