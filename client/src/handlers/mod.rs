//! Page behaviors, each written against the capability traits so the
//! logic runs without a browser.

pub mod contact_form;
pub mod lead_delete;
pub mod menu;
pub mod smooth_scroll;
