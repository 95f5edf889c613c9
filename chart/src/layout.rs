//! Plot geometry.
//!
//! Maps sample indices and values to CSS-pixel coordinates inside the plot
//! area. The y range is fixed to [`Y_MIN`, `Y_MAX`] regardless of the data;
//! values outside it map outside the plot area and are clipped at draw time,
//! never clamped here.

use crate::consts::{
    MARGIN_BOTTOM_PX, MARGIN_LEFT_PX, MARGIN_RIGHT_PX, MARGIN_TOP_PX, MIN_LABEL_SPACING_PX, Y_MAX, Y_MIN,
    Y_TICK_STEP,
};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Rectangle the series is drawn into, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area for a viewport, after reserving margins for labels and legend.
    ///
    /// Degenerate viewports produce a zero-sized area rather than a negative one.
    #[must_use]
    pub fn for_viewport(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            left: MARGIN_LEFT_PX,
            top: MARGIN_TOP_PX,
            width: (viewport_w - MARGIN_LEFT_PX - MARGIN_RIGHT_PX).max(0.0),
            height: (viewport_h - MARGIN_TOP_PX - MARGIN_BOTTOM_PX).max(0.0),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X coordinate of sample `index` out of `count`.
    ///
    /// A single sample sits in the middle; otherwise samples span the full width.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width * 0.5;
        }
        self.left + self.width * (index as f64) / ((count - 1) as f64)
    }

    /// Y coordinate of `value`. Not clamped to the plot area.
    #[must_use]
    pub fn y_for(&self, value: f64) -> f64 {
        let t = (value - Y_MIN) / (Y_MAX - Y_MIN);
        self.bottom() - t * self.height
    }
}

/// Pixel positions of `samples`, in order.
#[must_use]
pub fn line_points(plot: &PlotArea, samples: &[f64]) -> Vec<(f64, f64)> {
    let count = samples.len();
    samples.iter().enumerate().map(|(i, &v)| (plot.x_for(i, count), plot.y_for(v))).collect()
}

/// Closed polygon under the line: the line points, then down to the x axis
/// under the last sample and back under the first. Empty for no samples.
#[must_use]
pub fn fill_polygon(plot: &PlotArea, samples: &[f64]) -> Vec<(f64, f64)> {
    let mut polygon = line_points(plot, samples);
    let (Some(&(first_x, _)), Some(&(last_x, _))) = (polygon.first(), polygon.last()) else {
        return polygon;
    };
    polygon.push((last_x, plot.bottom()));
    polygon.push((first_x, plot.bottom()));
    polygon
}

/// Grid/label values on the y axis: `Y_MIN`, `Y_MIN + step`, ..., `Y_MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn y_ticks() -> Vec<f64> {
    let steps = ((Y_MAX - Y_MIN) / Y_TICK_STEP).round() as usize;
    (0..=steps).map(|i| Y_MIN + Y_TICK_STEP * i as f64).collect()
}

/// Draw every `n`-th x label so labels do not overlap.
///
/// Always at least 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn label_stride(count: usize, plot_width: f64) -> usize {
    if count <= 1 || plot_width <= 0.0 {
        return 1;
    }
    let fits = (plot_width / MIN_LABEL_SPACING_PX).floor().max(1.0) as usize;
    count.div_ceil(fits).max(1)
}
