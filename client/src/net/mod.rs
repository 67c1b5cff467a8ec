//! Networking for the two form endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `forms` transport seam over `gloo-net`; the
//! submitters never see a request type directly.

pub mod api;
