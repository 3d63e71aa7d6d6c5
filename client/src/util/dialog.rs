//! Blocking user dialogs (`window.confirm` / `window.alert`).

/// Confirmation and notification prompts shown to the user.
pub trait Dialogs {
    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

impl<D: Dialogs + ?Sized> Dialogs for &D {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

/// Native browser dialogs. A dialog that cannot be shown counts as declined.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

#[cfg(feature = "hydrate")]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
