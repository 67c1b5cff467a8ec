//! # client
//!
//! Leptos + WASM front end for the chat message and blob ticket forms.
//!
//! Submission behavior lives in the shared `forms` crate; this crate supplies
//! the browser pieces around it: a `gloo-net` transport, DOM and signal
//! backed fields, the two form components, and the entry points that either
//! hydrate the Leptos app or bind to forms already present in the page.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Hydrate the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}

/// Bind submit handlers to the `#new-message` and `#blob-upload` forms of a
/// page that was not rendered by Leptos.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn attach_forms() {
    init_browser_logging();
    util::attach::attach_forms(&forms::Session::default());
}

#[cfg(feature = "hydrate")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    // Ignored when a logger is already installed by the other entry point.
    let _ = console_log::init_with_level(log::Level::Debug);
}
