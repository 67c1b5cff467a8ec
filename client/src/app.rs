//! Root application component and context providers.

use forms::Session;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{blob_form::BlobForm, message_form::MessageForm};
use crate::state::session::provide_session;

/// Root application component.
///
/// Provides the page-lifetime session and renders both forms. The forms are
/// independent; the session is the only thing they could share.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session(Session::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/liminal.css"/>
        <Title text="liminal"/>

        <main class="section">
            <MessageForm/>
            <BlobForm/>
        </main>
    }
}
