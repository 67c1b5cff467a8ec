//! Chat message form posting to `/message`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the room and connectivity from the session context at submit time.
//! The message input is cleared only after the server accepts the message.

use forms::MessageSubmitter;
use leptos::prelude::*;

use crate::net::api::GlooTransport;
use crate::state::field::SignalField;
use crate::state::session::use_session;
use crate::util::form_ids::{MESSAGE_FIELD_ID, MESSAGE_FORM_ID, USERNAME_FIELD_ID};

/// Username + message inputs with a send button.
#[component]
pub fn MessageForm() -> impl IntoView {
    let message = SignalField::new("input");
    let username = SignalField::new("input");
    let submitter = StoredValue::new_local(MessageSubmitter::new(use_session(), message, username, GlooTransport));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let submitter = submitter.get_value();
            leptos::task::spawn_local(async move {
                let _ = submitter.submit().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submitter;
        }
    };

    view! {
        <form id=MESSAGE_FORM_ID class="message-form" on:submit=on_submit>
            <input
                id=USERNAME_FIELD_ID
                class=move || username.class.get()
                type="text"
                placeholder="guest"
                prop:value=move || username.value.get()
                on:input=move |ev| username.value.set(event_target_value(&ev))
            />
            <input
                id=MESSAGE_FIELD_ID
                class=move || message.class.get()
                type="text"
                placeholder="Say something..."
                prop:value=move || message.value.get()
                on:input=move |ev| message.value.set(event_target_value(&ev))
            />
            <button class="button is-primary" type="submit">
                "Send"
            </button>
        </form>
    }
}
