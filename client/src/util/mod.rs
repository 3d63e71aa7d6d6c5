//! Utility helpers shared across the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (dialogs, storage,
//! theme persistence) from handler logic to improve reuse and testability.

pub mod dark_mode;
pub mod dialog;
pub mod storage;
