//! Browser helpers shared by the components and the attach entry point.

pub mod form_ids;

#[cfg(feature = "hydrate")]
pub mod attach;
#[cfg(feature = "hydrate")]
pub mod dom_field;
