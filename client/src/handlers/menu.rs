//! Mobile navigation toggle.

use crate::dom::ClassList;

/// Class that opens the `.menu` container.
pub const ACTIVE_CLASS: &str = "active";

pub struct MenuToggle<C> {
    menu: C,
}

impl<C: ClassList> MenuToggle<C> {
    pub fn new(menu: C) -> Self {
        Self { menu }
    }

    /// Returns whether the menu is now open.
    pub fn toggle(&self) -> bool {
        self.menu.toggle_class(ACTIVE_CLASS)
    }
}
