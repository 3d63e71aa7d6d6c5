//! In-memory stand-ins for page elements, dialogs, and the network.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;

use crate::dom::{ClassList, Detach, FormFields, IconSlot, ScrollTarget, SubmitControl};
use crate::net::transport::{Transport, TransportError};
use crate::util::dialog::Dialogs;

// =============================================================================
// ELEMENTS
// =============================================================================

#[derive(Debug, Default)]
pub struct FakeElement {
    pub classes: RefCell<Vec<String>>,
    pub icon_class: RefCell<String>,
    pub detached: Cell<u32>,
    pub scrolled: Cell<u32>,
}

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        el.classes.replace(classes.iter().map(|c| (*c).to_owned()).collect());
        el
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.classes.borrow_mut().push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }
}

impl Detach for FakeElement {
    fn detach(&self) {
        self.detached.set(self.detached.get() + 1);
    }
}

impl IconSlot for FakeElement {
    fn set_icon_class(&self, class: &str) {
        self.icon_class.replace(class.to_owned());
    }
}

impl ScrollTarget for FakeElement {
    fn scroll_into_view_smooth(&self) {
        self.scrolled.set(self.scrolled.get() + 1);
    }
}

#[derive(Debug)]
pub struct FakeButton {
    pub label: RefCell<String>,
    pub disabled: Cell<bool>,
    /// Every `set_disabled` call, in order.
    pub disabled_history: RefCell<Vec<bool>>,
}

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self { label: RefCell::new(label.to_owned()), disabled: Cell::new(false), disabled_history: RefCell::default() }
    }
}

impl SubmitControl for FakeButton {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        self.label.replace(label.to_owned());
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.disabled_history.borrow_mut().push(disabled);
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    pub fields: RefCell<HashMap<String, String>>,
    pub resets: Cell<u32>,
}

impl FakeForm {
    pub fn filled(nome: &str, email: &str, mensagem: &str) -> Self {
        let form = Self::default();
        {
            let mut fields = form.fields.borrow_mut();
            fields.insert("nome".into(), nome.into());
            fields.insert("email".into(), email.into());
            fields.insert("mensagem".into(), mensagem.into());
        }
        form
    }
}

impl FormFields for FakeForm {
    fn field(&self, name: &str) -> String {
        self.fields.borrow().get(name).cloned().unwrap_or_default()
    }

    fn reset(&self) {
        self.fields.borrow_mut().values_mut().for_each(String::clear);
        self.resets.set(self.resets.get() + 1);
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

#[derive(Debug, Default)]
pub struct FakeDialogs {
    pub accept: bool,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakeDialogs {
    pub fn accepting() -> Self {
        Self { accept: true, ..Self::default() }
    }

    pub fn declining() -> Self {
        Self { accept: false, ..Self::default() }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for FakeDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.accept
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug)]
pub struct FakeTransport {
    reply: Result<u16, TransportError>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn replying(status: u16) -> Self {
        Self { reply: Ok(status), requests: RefCell::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { reply: Err(TransportError::Network(message.to_owned())), requests: RefCell::default() }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn post_empty(&self, url: &str) -> Result<u16, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest { url: url.to_owned(), body: None });
        self.reply.clone()
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.requests.borrow_mut().push(RecordedRequest { url: url.to_owned(), body: Some(body) });
        self.reply.clone()
    }
}
