//! Per-form request generation counter.
//!
//! Every request takes a [`Ticket`]. When it completes, the ticket is compared
//! with the newest one issued by the same counter. By default every 2xx
//! completion applies its side effect, so the field follows completion order;
//! a submitter opted into [`CompletionPolicy::LatestOnly`] lets only the
//! newest ticket touch the field.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use std::cell::Cell;
use std::rc::Rc;

/// Which completions may apply their success side effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Every completion applies its own side effect, in completion order.
    #[default]
    EveryResponse,
    /// Only the most recently issued request may mutate the field.
    LatestOnly,
}

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic counter shared by clones of one submitter.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

impl RequestGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket; it becomes the current one.
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Whether a completion holding `ticket` may apply its side effect.
    #[must_use]
    pub fn admits(&self, policy: CompletionPolicy, ticket: Ticket) -> bool {
        match policy {
            CompletionPolicy::LatestOnly => self.is_current(ticket),
            CompletionPolicy::EveryResponse => true,
        }
    }
}
