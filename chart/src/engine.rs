use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::layout::PlotArea;
use crate::render;
use crate::series::LineSeries;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Fallback CSS size when the canvas has not been laid out yet.
const DEFAULT_VIEWPORT_W: f64 = 600.0;
const DEFAULT_VIEWPORT_H: f64 = 300.0;

/// Core chart state — everything that doesn't depend on the canvas element.
///
/// Separated from `Chart` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct ChartCore {
    pub series: LineSeries,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for ChartCore {
    fn default() -> Self {
        Self {
            series: LineSeries::default(),
            viewport_width: DEFAULT_VIEWPORT_W,
            viewport_height: DEFAULT_VIEWPORT_H,
            dpr: 1.0,
        }
    }
}

impl ChartCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the plotted data with the series derived from `entries`.
    pub fn load_entries<S: AsRef<str>>(&mut self, entries: &[S]) {
        self.series = LineSeries::from_entries(entries);
    }

    /// Record the CSS size of the canvas and the device pixel ratio.
    ///
    /// Zero or negative sizes (an unlaid-out canvas) keep the defaults.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = if width > 0.0 { width } else { DEFAULT_VIEWPORT_W };
        self.viewport_height = if height > 0.0 { height } else { DEFAULT_VIEWPORT_H };
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::for_viewport(self.viewport_width, self.viewport_height)
    }

    /// Canvas backing-store size in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.viewport_width * self.dpr).round() as u32,
            (self.viewport_height * self.dpr).round() as u32,
        )
    }
}

/// The mounted chart. Wraps `ChartCore` and owns the canvas and its 2D context.
pub struct Chart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: ChartCore,
}

impl Chart {
    /// Bind to `canvas`. Returns `Ok(None)` when the canvas has no 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the context request.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let Some(raw) = canvas.get_context("2d")? else {
            return Ok(None);
        };
        let ctx = raw.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from)?;
        Ok(Some(Self { canvas, ctx, core: ChartCore::new() }))
    }

    /// Plot `entries` and draw the chart.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render<S: AsRef<str>>(&mut self, entries: &[S]) -> Result<(), JsValue> {
        self.core.load_entries(entries);
        self.sync_viewport();
        render::draw(
            &self.ctx,
            &self.core.series,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    fn sync_viewport(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        self.core.set_viewport(
            f64::from(self.canvas.client_width()),
            f64::from(self.canvas.client_height()),
            dpr,
        );
        let (w, h) = self.core.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }
}
