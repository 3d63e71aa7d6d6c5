//! # evolute-client
//!
//! Browser behaviors for the Evolute marketing site and its admin panel,
//! compiled to WASM with the `hydrate` feature.
//!
//! Each behavior is an independent event binding: the contact form
//! submitter, the lead-deletion links, the dark-mode toggle, the mobile
//! menu toggle, and smooth-scroll anchors. Handler logic is written against
//! the small traits in [`dom`], [`util::dialog`], [`util::storage`] and
//! [`net::transport`], so it runs natively under `cargo test` with in-memory
//! fakes; the `hydrate` build supplies the `web-sys`/`gloo-net` versions and
//! the [`binder`] that wires them to the page.

#[cfg(feature = "hydrate")]
pub mod binder;
pub mod dom;
pub mod handlers;
pub mod net;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: install logging, then bind every behavior once the
/// document is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    binder::bind_when_ready();
}
