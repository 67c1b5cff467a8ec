//! Outgoing payloads and their URL-encoded bodies.
//!
//! Field order in the structs is the order on the wire.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Serialize;

use crate::error::FormError;

/// Username sent when the username field is left empty.
pub const DEFAULT_USERNAME: &str = "guest";

/// A chat message bound for `/message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub room: String,
    pub username: String,
    pub message: String,
}

impl OutgoingMessage {
    /// Build from raw field values, substituting [`DEFAULT_USERNAME`] for an
    /// empty username.
    #[must_use]
    pub fn from_inputs(room: String, username: String, message: String) -> Self {
        let username = if username.is_empty() { DEFAULT_USERNAME.to_owned() } else { username };
        Self { room, username, message }
    }

    /// # Errors
    ///
    /// Returns [`FormError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, FormError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Blob text bound for `/blob`. Sent under the `message` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingBlob {
    pub message: String,
}

impl OutgoingBlob {
    /// # Errors
    ///
    /// Returns [`FormError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, FormError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}
