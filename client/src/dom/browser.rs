//! `web-sys` implementations of the element capability traits.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
};

use super::{ClassList, Detach, FormFields, IconSlot, ScrollTarget, SubmitControl};

impl ClassList for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

impl Detach for Element {
    fn detach(&self) {
        Element::remove(self);
    }
}

impl IconSlot for Element {
    fn set_icon_class(&self, class: &str) {
        self.set_class_name(class);
    }
}

impl ScrollTarget for Element {
    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl SubmitControl for HtmlInputElement {
    fn label(&self) -> String {
        self.value()
    }

    fn set_label(&self, label: &str) {
        self.set_value(label);
    }

    fn is_disabled(&self) -> bool {
        self.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        HtmlInputElement::set_disabled(self, disabled);
    }
}

impl FormFields for HtmlFormElement {
    fn field(&self, name: &str) -> String {
        let Ok(Some(el)) = self.query_selector(&format!("[name=\"{name}\"]")) else {
            log::warn!("form field {name:?} not found");
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn reset(&self) {
        HtmlFormElement::reset(self);
    }
}
