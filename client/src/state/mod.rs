//! Page state: theme mode and prediction history.
//!
//! These are plain values; the controllers in [`crate::util`] own the
//! persistence and DOM side effects.

pub mod history;
pub mod theme;
