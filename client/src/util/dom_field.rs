//! `FormField` over live DOM elements. Requires a browser environment.

use forms::FormField;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

/// A text input or textarea looked up once and injected into a submitter.
#[derive(Clone, Debug)]
pub enum DomField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl DomField {
    /// Wrap `element` if it is an `<input>` or `<textarea>`.
    pub fn from_element(element: Element) -> Option<Self> {
        element
            .dyn_into::<HtmlInputElement>()
            .map(Self::Input)
            .or_else(|element| element.dyn_into::<HtmlTextAreaElement>().map(Self::TextArea))
            .ok()
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
        }
    }
}

impl FormField for DomField {
    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }

    fn class_name(&self) -> String {
        self.element().class_name()
    }

    fn set_class_name(&self, class: &str) {
        self.element().set_class_name(class);
    }
}
