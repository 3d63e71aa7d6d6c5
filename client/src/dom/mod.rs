//! Element capabilities the handlers need from the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers receive explicit element references implementing these traits
//! instead of reaching into `document` themselves. The `hydrate` build
//! implements them for `web-sys` types in [`browser`]; tests use fakes.

#[cfg(feature = "hydrate")]
pub mod browser;

/// CSS class manipulation on a single element.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

/// An element that can take itself out of the document.
pub trait Detach {
    fn detach(&self);
}

/// An icon whose whole `class` attribute is swapped to change glyphs.
pub trait IconSlot {
    fn set_icon_class(&self, class: &str);
}

/// An element that can be brought into view with a smooth scroll.
pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

/// The submit control of a form.
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// Named text fields of a form.
pub trait FormFields {
    /// Current value of the field called `name`; empty when absent.
    fn field(&self, name: &str) -> String;
    /// Restore every field to its initial value.
    fn reset(&self);
}

impl<T: ClassList + ?Sized> ClassList for &T {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }
}

impl<T: Detach + ?Sized> Detach for &T {
    fn detach(&self) {
        (**self).detach();
    }
}

impl<T: IconSlot + ?Sized> IconSlot for &T {
    fn set_icon_class(&self, class: &str) {
        (**self).set_icon_class(class);
    }
}

impl<T: ScrollTarget + ?Sized> ScrollTarget for &T {
    fn scroll_into_view_smooth(&self) {
        (**self).scroll_into_view_smooth();
    }
}
