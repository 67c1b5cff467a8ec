//! Bind the submitters to forms already present in the document.
//!
//! Ids are resolved once at attach time and the resulting [`DomField`]s are
//! injected into the submitters; a handler never queries the document. A
//! missing form or field is logged and only that form is skipped.

use std::future::Future;

use forms::{BlobSubmitter, MessageSubmitter, Session, SubmitOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlFormElement};

use super::dom_field::DomField;
use super::form_ids::*;
use crate::net::api::GlooTransport;

/// Attach both forms, logging (not failing) on missing markup.
pub fn attach_forms(session: &Session) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; forms not attached");
        return;
    };

    if let Err(e) = attach_message_form(&document, session) {
        log::warn!("message form not attached: {e}");
    }
    if let Err(e) = attach_blob_form(&document) {
        log::warn!("blob form not attached: {e}");
    }
}

fn attach_message_form(document: &Document, session: &Session) -> Result<(), String> {
    let form = lookup_form(document, MESSAGE_FORM_ID)?;
    let message = lookup_field(&form, MESSAGE_FIELD_ID)?;
    let username = lookup_field(&form, USERNAME_FIELD_ID)?;
    let submitter = MessageSubmitter::new(session.clone(), message, username, GlooTransport);

    on_submit(&form, move || {
        let submitter = submitter.clone();
        async move { submitter.submit().await }
    })
}

fn attach_blob_form(document: &Document) -> Result<(), String> {
    let form = lookup_form(document, BLOB_FORM_ID)?;
    let field = lookup_field(&form, BLOB_FIELD_ID)?;
    let submitter = BlobSubmitter::new(field, GlooTransport);

    on_submit(&form, move || {
        let submitter = submitter.clone();
        async move { submitter.submit().await }
    })
}

fn lookup_form(document: &Document, id: &str) -> Result<HtmlFormElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing #{id}"))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| format!("#{id} is not a form"))
}

fn lookup_field(form: &HtmlFormElement, id: &str) -> Result<DomField, String> {
    let element = form
        .query_selector(&id_selector(id))
        .map_err(|e| format!("bad selector for #{id}: {e:?}"))?
        .ok_or_else(|| format!("missing #{id}"))?;
    DomField::from_element(element).ok_or_else(|| format!("#{id} is not a text field"))
}

/// Register a `submit` listener that suppresses the default navigation and
/// runs `submit` as a local task. The listener lives as long as the page.
fn on_submit<S, Fut>(form: &HtmlFormElement, submit: S) -> Result<(), String>
where
    S: Fn() -> Fut + 'static,
    Fut: Future<Output = SubmitOutcome> + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        let pending = submit();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = pending.await;
        });
    });
    form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
        .map_err(|e| format!("addEventListener failed: {e:?}"))?;
    callback.forget();
    Ok(())
}
