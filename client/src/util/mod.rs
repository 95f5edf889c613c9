//! Controllers shared by the page entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, elements) behind small
//! traits so the theme and history logic can be tested with in-memory fakes.

pub mod dark_mode;
pub mod history_replay;
pub mod ui_persistence;
