//! Rendering: draws the confidence chart to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`LineSeries`] and produces pixels.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Chart::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    AXIS_STROKE, GRID_STROKE, LABEL_FILL, LABEL_FONT, LINE_WIDTH_PX, POINT_RADIUS_PX, SERIES_FILL, SERIES_STROKE,
};
use crate::layout::{PlotArea, fill_polygon, label_stride, line_points, y_ticks};
use crate::series::LineSeries;

/// Legend swatch size in CSS pixels.
const LEGEND_SWATCH_PX: f64 = 12.0;

/// Gap between an axis and its labels.
const LABEL_GAP_PX: f64 = 6.0;

/// Draw the full chart: grid, axes, labels, legend, then the series.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    series: &LineSeries,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    let plot = PlotArea::for_viewport(viewport_w, viewport_h);

    draw_grid(ctx, &plot)?;
    draw_axes(ctx, &plot);
    draw_x_labels(ctx, &plot, series)?;
    draw_legend(ctx, series.name, viewport_w)?;
    draw_series(ctx, &plot, series)?;
    Ok(())
}

// =============================================================
// Frame
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, plot: &PlotArea) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");

    for tick in y_ticks() {
        let y = plot.y_for(tick);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();
        ctx.fill_text(&format!("{tick:.1}"), plot.left - LABEL_GAP_PX, y)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_axes(ctx: &CanvasRenderingContext2d, plot: &PlotArea) {
    ctx.save();
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(AXIS_STROKE);
    ctx.begin_path();
    ctx.move_to(plot.left, plot.top);
    ctx.line_to(plot.left, plot.bottom());
    ctx.line_to(plot.right(), plot.bottom());
    ctx.stroke();
    ctx.restore();
}

fn draw_x_labels(ctx: &CanvasRenderingContext2d, plot: &PlotArea, series: &LineSeries) -> Result<(), JsValue> {
    let count = series.len();
    let stride = label_stride(count, plot.width);

    ctx.save();
    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");

    for (i, label) in series.labels.iter().enumerate().step_by(stride) {
        ctx.fill_text(label, plot.x_for(i, count), plot.bottom() + LABEL_GAP_PX)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_legend(ctx: &CanvasRenderingContext2d, name: &str, viewport_w: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(LABEL_FONT);
    let text_w = ctx.measure_text(name)?.width();
    let total_w = LEGEND_SWATCH_PX + LABEL_GAP_PX + text_w;
    let x = (viewport_w - total_w) * 0.5;
    let y = LABEL_GAP_PX;

    ctx.set_fill_style_str(SERIES_FILL);
    ctx.fill_rect(x, y, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX);
    ctx.set_stroke_style_str(SERIES_STROKE);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.stroke_rect(x, y, LEGEND_SWATCH_PX, LEGEND_SWATCH_PX);

    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.fill_text(name, x + LEGEND_SWATCH_PX + LABEL_GAP_PX, y + LEGEND_SWATCH_PX * 0.5)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Series
// =============================================================

fn draw_series(ctx: &CanvasRenderingContext2d, plot: &PlotArea, series: &LineSeries) -> Result<(), JsValue> {
    if series.is_empty() {
        return Ok(());
    }
    let points = line_points(plot, &series.samples);

    ctx.save();
    // Out-of-range samples keep their position and are cut at the plot edge.
    ctx.begin_path();
    ctx.rect(plot.left, plot.top, plot.width, plot.height);
    ctx.clip();

    trace_path(ctx, &fill_polygon(plot, &series.samples));
    ctx.close_path();
    ctx.set_fill_style_str(SERIES_FILL);
    ctx.fill();

    ctx.set_stroke_style_str(SERIES_STROKE);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.set_line_join("round");
    trace_path(ctx, &points);
    ctx.stroke();

    ctx.set_fill_style_str(SERIES_STROKE);
    for &(x, y) in &points {
        ctx.begin_path();
        ctx.arc(x, y, POINT_RADIUS_PX, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.restore();
    Ok(())
}

/// Begin a new path through `points`.
fn trace_path(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
}
