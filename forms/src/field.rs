//! Typed field references injected into the submitters.
//!
//! A [`FormField`] is anything with a readable/writable value and a class
//! attribute: a DOM input, a pair of Leptos signals, or the in-memory
//! [`MemoryField`] used by the CLI and tests. Methods take `&self` because
//! the underlying elements are shared, interior-mutable handles.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::cell::RefCell;
use std::rc::Rc;

pub trait FormField {
    /// Value at the moment of the call; never cached by callers.
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn class_name(&self) -> String;

    fn set_class_name(&self, class: &str);

    /// Shorthand for `set_value("")`.
    fn clear(&self) {
        self.set_value("");
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    class: String,
}

/// Field backed by shared memory. Clones observe the same value.
#[derive(Clone, Debug, Default)]
pub struct MemoryField {
    state: Rc<RefCell<FieldState>>,
}

impl MemoryField {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                value: value.into(),
                class: String::new(),
            })),
        }
    }

    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.state.borrow_mut().class = class.into();
        self
    }
}

impl FormField for MemoryField {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.state.borrow_mut().value);
    }

    fn class_name(&self) -> String {
        self.state.borrow().class.clone()
    }

    fn set_class_name(&self, class: &str) {
        class.clone_into(&mut self.state.borrow_mut().class);
    }
}
