//! Page-lifetime session context shared by the submitters.
//!
//! DESIGN
//! ======
//! The session is injected into each submitter instead of living in a
//! module-level global. [`Session`] is a cheap clone of one shared record, so
//! a room switch made through any handle is seen by every submitter.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

/// Room joined when nothing else was chosen.
pub const DEFAULT_ROOM: &str = "lobby";

/// Session record: current room, per-room cache, connectivity flag.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub room: String,
    /// Per-room data keyed by room id. Not read by the submitters.
    pub rooms: HashMap<String, Value>,
    pub connected: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            room: DEFAULT_ROOM.to_owned(),
            rooms: HashMap::new(),
            connected: true,
        }
    }
}

/// Shared handle to a [`SessionState`].
#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Rc<RefCell<SessionState>>,
}

impl Session {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self { inner: Rc::new(RefCell::new(state)) }
    }

    /// Current room identifier.
    #[must_use]
    pub fn room(&self) -> String {
        self.inner.borrow().room.clone()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.borrow().connected
    }

    pub fn set_connected(&self, connected: bool) {
        self.inner.borrow_mut().connected = connected;
    }

    /// Switch the current room, creating an empty cache entry for it.
    pub fn join_room(&self, room: impl Into<String>) {
        let room = room.into();
        let mut state = self.inner.borrow_mut();
        state.rooms.entry(room.clone()).or_insert(Value::Null);
        state.room = room;
    }

    /// Copy of the record as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().clone()
    }
}
