//! Shared constants for the chart crate.

// ── Series ──────────────────────────────────────────────────────

/// Legend name of the only series on the chart.
pub const SERIES_NAME: &str = "Pneumonia Confidence";

/// Prefix for the 1-indexed x-axis labels.
pub const LABEL_PREFIX: &str = "Prediction";

// ── Axis ────────────────────────────────────────────────────────

/// Lower bound of the displayed y range.
pub const Y_MIN: f64 = 0.0;

/// Upper bound of the displayed y range.
pub const Y_MAX: f64 = 1.0;

/// Distance between horizontal grid lines, in value units.
pub const Y_TICK_STEP: f64 = 0.2;

// ── Geometry (CSS pixels) ───────────────────────────────────────

pub const MARGIN_LEFT_PX: f64 = 44.0;
pub const MARGIN_RIGHT_PX: f64 = 16.0;
pub const MARGIN_TOP_PX: f64 = 32.0;
pub const MARGIN_BOTTOM_PX: f64 = 36.0;

/// Minimum horizontal room one x label needs before labels are thinned.
pub const MIN_LABEL_SPACING_PX: f64 = 72.0;

/// Radius of the marker drawn at each sample.
pub const POINT_RADIUS_PX: f64 = 3.5;

pub const LINE_WIDTH_PX: f64 = 2.0;

// ── Colors ──────────────────────────────────────────────────────

pub const SERIES_STROKE: &str = "rgba(255, 99, 132, 1)";
pub const SERIES_FILL: &str = "rgba(255, 99, 132, 0.2)";
pub const GRID_STROKE: &str = "rgba(128, 128, 128, 0.25)";
pub const AXIS_STROKE: &str = "rgba(128, 128, 128, 0.8)";
pub const LABEL_FILL: &str = "rgba(128, 128, 128, 1)";
pub const LABEL_FONT: &str = "12px sans-serif";
