//! Confidence history chart for the prediction page.
//!
//! This crate is compiled to WebAssembly and draws directly onto a
//! `<canvas>` 2D context. Everything except [`render`] and [`Chart`] is
//! plain Rust so the data path (text entry to plotted point) can be tested
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`confidence`] | Extracts the `(<number>)` confidence from a result string |
//! | [`series`] | Builds the labelled line series from history entries |
//! | [`layout`] | Plot geometry: value-to-pixel mapping, ticks, label thinning |
//! | [`render`] | Draws axes, grid, legend and the series onto a 2D context |
//! | [`engine`] | [`Chart`] mount point and the testable [`ChartCore`] |
//! | [`consts`] | Shared constants (series name, axis range, colors) |

pub mod confidence;
pub mod consts;
pub mod engine;
pub mod layout;
pub mod render;
pub mod series;

pub use engine::{Chart, ChartCore};
pub use series::LineSeries;
