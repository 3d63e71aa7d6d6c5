//! Wires the handlers to the live page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every binding looks up its elements once, builds its handler, and hands
//! the browser a leaked `Closure` for the page's lifetime. A page that lacks
//! an element simply skips that behavior, so the same bundle serves the
//! public site and the admin panel.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement};

use crate::handlers::contact_form::ContactFormSubmitter;
use crate::handlers::lead_delete::LeadDeleteControl;
use crate::handlers::menu::MenuToggle;
use crate::handlers::smooth_scroll::scroll_to_fragment;
use crate::net::api::{DeleteEndpoint, api_url, leads_endpoint};
use crate::net::transport::GlooTransport;
use crate::util::dark_mode::ThemeToggle;
use crate::util::dialog::BrowserDialogs;
use crate::util::storage::{KeyValueStore, LocalStorage, MemoryStore};

/// Bind now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn bind_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; nothing bound");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        listen(&document, "DOMContentLoaded", move |_| bind_all(&doc));
    } else {
        bind_all(&document);
    }
}

fn bind_all(document: &Document) {
    bind_theme_toggle(document);
    bind_menu(document);
    bind_smooth_scroll(document);
    bind_contact_form(document);
    bind_delete_links(document);
}

/// Attach `handler` to `event` on `target` for the rest of the page's life.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()).is_err() {
        log::warn!("could not attach {event} listener");
        return;
    }
    cb.forget();
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// =============================================================================
// THEME
// =============================================================================

enum PageStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(s) => s.get(key),
            Self::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Local(s) => s.set(key, value),
            Self::Memory(s) => s.set(key, value),
        }
    }
}

fn bind_theme_toggle(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let store = LocalStorage::open().map_or_else(
        || {
            log::warn!("localStorage unavailable; dark mode will not persist");
            PageStore::Memory(MemoryStore::new())
        },
        PageStore::Local,
    );
    let icon = document.get_element_by_id("theme-icon");
    let toggle = Rc::new(ThemeToggle::new(Element::from(body), icon.clone(), store));
    toggle.restore();

    let Some(button) = document.get_element_by_id("theme-toggle").or(icon) else {
        return;
    };
    listen(&button, "click", move |_| {
        toggle.toggle();
    });
}

// =============================================================================
// MENU / SCROLL
// =============================================================================

fn bind_menu(document: &Document) {
    let (Some(button), Ok(Some(menu))) = (document.get_element_by_id("menu_mov"), document.query_selector(".menu"))
    else {
        return;
    };
    let menu = MenuToggle::new(menu);
    listen(&button, "click", move |_| {
        menu.toggle();
    });
}

fn bind_smooth_scroll(document: &Document) {
    for anchor in select_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll_to_fragment(&href, |id| doc.get_element_by_id(id));
        });
    }
}

// =============================================================================
// CONTACT FORM
// =============================================================================

fn bind_contact_form(document: &Document) {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = form
        .query_selector("input[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("#contactForm has no submit input; not bound");
        return;
    };

    let submitter = Rc::new(ContactFormSubmitter::new(leads_endpoint(api_url()), GlooTransport, BrowserDialogs));
    log::debug!("contact form posts to {}", submitter.endpoint());
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let (submitter, form, button) = (Rc::clone(&submitter), form.clone(), button.clone());
        wasm_bindgen_futures::spawn_local(async move {
            submitter.submit(&form, &button).await;
        });
    });
}

// =============================================================================
// LEAD DELETION
// =============================================================================

fn bind_delete_links(document: &Document) {
    let links = select_all(document, ".delete-link");
    if links.is_empty() {
        return;
    }
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let page_endpoint = DeleteEndpoint::for_page_path(&path);

    for link in links {
        let endpoint = link
            .get_attribute("data-delete-endpoint")
            .map_or_else(|| page_endpoint.clone(), DeleteEndpoint::new);
        let control = Rc::new(LeadDeleteControl::new(endpoint, GlooTransport, BrowserDialogs));
        let target = link.clone();
        listen(&target, "click", move |event| {
            event.prevent_default();
            let (control, link) = (Rc::clone(&control), link.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let lead_id = link.get_attribute("data-lead-id");
                control.handle_click(lead_id.as_deref(), &link).await;
            });
        });
    }
    log::debug!("bound delete links for {}", page_endpoint.template());
}
