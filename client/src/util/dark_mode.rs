//! Dark mode restore and toggle.
//!
//! The preference is stored under `darkMode` as `"enabled"`/`"disabled"`
//! and mirrored as the `.dark-mode` class on `<body>`. The theme icon's
//! class tracks the state so the button always shows the mode a click
//! switches to.

use crate::dom::{ClassList, IconSlot};
use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "darkMode";
pub const DARK_CLASS: &str = "dark-mode";
/// Icon while dark mode is on (click for light).
pub const ICON_WHEN_DARK: &str = "fas fa-sun";
/// Icon while dark mode is off (click for dark).
pub const ICON_WHEN_LIGHT: &str = "fas fa-moon";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Enabled,
    Disabled,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    /// Anything other than `"enabled"` reads as disabled.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "enabled" { Self::Enabled } else { Self::Disabled }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }
}

/// Dark mode toggle bound to the page body, the theme icon, and a store.
pub struct ThemeToggle<B, I, S> {
    body: B,
    icon: Option<I>,
    store: S,
}

impl<B, I, S> ThemeToggle<B, I, S>
where
    B: ClassList,
    I: IconSlot,
    S: KeyValueStore,
{
    /// The icon is optional; pages without one still get the body class.
    pub fn new(body: B, icon: Option<I>, store: S) -> Self {
        Self { body, icon, store }
    }

    /// Current state as shown on the page.
    pub fn current(&self) -> ThemePreference {
        if self.body.has_class(DARK_CLASS) { ThemePreference::Enabled } else { ThemePreference::Disabled }
    }

    /// Apply the stored preference without writing anything back.
    pub fn restore(&self) -> ThemePreference {
        let pref = self
            .store
            .get(STORAGE_KEY)
            .map_or(ThemePreference::Disabled, |raw| ThemePreference::parse(&raw));
        self.apply(pref);
        pref
    }

    /// Flip the theme and persist the new state.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.current().flipped();
        self.apply(next);
        self.store.set(STORAGE_KEY, next.as_str());
        log::debug!("dark mode {}", next.as_str());
        next
    }

    fn apply(&self, pref: ThemePreference) {
        match pref {
            ThemePreference::Enabled => self.body.add_class(DARK_CLASS),
            ThemePreference::Disabled => self.body.remove_class(DARK_CLASS),
        }
        if let Some(icon) = &self.icon {
            icon.set_icon_class(match pref {
                ThemePreference::Enabled => ICON_WHEN_DARK,
                ThemePreference::Disabled => ICON_WHEN_LIGHT,
            });
        }
    }
}

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod tests;
