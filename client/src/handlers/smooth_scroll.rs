//! In-page anchor scrolling.

use crate::dom::ScrollTarget;

/// The element id an `href` points at, if it is a non-empty fragment link.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll to the target of `href`, looked up through `resolve`.
///
/// Returns `false` for a bare `#`, a non-fragment link, or a fragment with
/// no matching element; nothing is scrolled in those cases.
pub fn scroll_to_fragment<T, F>(href: &str, resolve: F) -> bool
where
    T: ScrollTarget,
    F: FnOnce(&str) -> Option<T>,
{
    let Some(id) = fragment_id(href) else {
        log::debug!("anchor {href:?} has no fragment to scroll to");
        return false;
    };
    match resolve(id) {
        Some(target) => {
            target.scroll_into_view_smooth();
            true
        }
        None => {
            log::debug!("no element with id {id:?}");
            false
        }
    }
}
