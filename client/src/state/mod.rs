//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` exposes the page-lifetime `forms::Session` through Leptos
//! context; `field` adapts signals to the `forms::FormField` seam so the
//! components can hand their inputs to the submitters.

pub mod field;
pub mod session;
