//! Session context for the form components.
//!
//! `forms::Session` is `Rc`-based, so it is kept in local arena storage and
//! only the `Copy` handle travels through context.

use forms::Session;
use leptos::prelude::*;

pub type SessionContext = StoredValue<Session, LocalStorage>;

/// Make `session` available to every descendant component.
pub fn provide_session(session: Session) -> SessionContext {
    let stored = StoredValue::new_local(session);
    provide_context(stored);
    stored
}

/// The session provided by an ancestor, or a fresh default one.
pub fn use_session() -> Session {
    use_context::<SessionContext>().map_or_else(Session::default, |stored| stored.get_value())
}
