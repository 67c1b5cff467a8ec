#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use forms::FormField;
use leptos::prelude::*;

/// Form field whose value and class are reactive signals.
///
/// The component renders from the signals; the submitter reads and writes
/// them untracked through [`FormField`].
#[derive(Clone, Copy, Debug)]
pub struct SignalField {
    pub value: RwSignal<String>,
    pub class: RwSignal<String>,
}

impl SignalField {
    pub fn new(class: &str) -> Self {
        Self {
            value: RwSignal::new(String::new()),
            class: RwSignal::new(class.to_owned()),
        }
    }
}

impl FormField for SignalField {
    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn set_value(&self, value: &str) {
        self.value.set(value.to_owned());
    }

    fn class_name(&self) -> String {
        self.class.get_untracked()
    }

    fn set_class_name(&self, class: &str) {
        self.class.set(class.to_owned());
    }
}
