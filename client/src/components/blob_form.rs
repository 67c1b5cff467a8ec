//! Blob ticket form posting to `/blob`.

use forms::BlobSubmitter;
use leptos::prelude::*;

use crate::net::api::GlooTransport;
use crate::state::field::SignalField;
use crate::util::form_ids::{BLOB_FIELD_CLASS, BLOB_FIELD_ID, BLOB_FORM_ID};

/// Textarea for a blob ticket. Turns green (`is-success`) once a ticket is
/// accepted.
#[component]
pub fn BlobForm() -> impl IntoView {
    let field = SignalField::new(BLOB_FIELD_CLASS);
    let submitter = StoredValue::new_local(BlobSubmitter::new(field, GlooTransport));

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
        <form id=BLOB_FORM_ID class="blob-form" on:submit=on_submit>
            <textarea
                id=BLOB_FIELD_ID
                class=move || field.class.get()
                placeholder="blob ticket"
                prop:value=move || field.value.get()
                on:input=move |ev| field.value.set(event_target_value(&ev))
            ></textarea>
            <button class="button is-link" type="submit">
                "Fetch"
            </button>
        </form>
    }
}
