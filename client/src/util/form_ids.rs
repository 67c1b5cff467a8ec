//! Element ids of the two forms.
//!
//! Rendered by the components and looked up by the attach entry point, so
//! markup from either source binds the same way.

#[cfg(test)]
#[path = "form_ids_test.rs"]
mod form_ids_test;

pub const MESSAGE_FORM_ID: &str = "new-message";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const USERNAME_FIELD_ID: &str = "username";

pub const BLOB_FORM_ID: &str = "blob-upload";
pub const BLOB_FIELD_ID: &str = "blobtext";

/// Class of the blob textarea before any accepted submission.
pub const BLOB_FIELD_CLASS: &str = "textarea";

/// CSS selector for an element id.
pub fn id_selector(id: &str) -> String {
    format!("#{id}")
}
