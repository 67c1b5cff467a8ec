//! Form components.

pub mod blob_form;
pub mod message_form;
