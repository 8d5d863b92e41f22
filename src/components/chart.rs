//! Chart Component
//!
//! Worldwide daily-new line chart for the active metric, drawn on HTML5
//! Canvas from day-over-day deltas of the cumulative history.

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, MetricKind};
use crate::stats::daily_deltas;

/// Daily-trend chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the history or the active metric changes
    create_effect(move |_| {
        let history = state.history.get();
        let kind = state.metric.get();

        if let Some(canvas) = canvas_ref.get() {
            let points = history
                .map(|timeline| daily_deltas(&timeline.series(kind)))
                .unwrap_or_default();
            draw_chart(&canvas, &points, kind);
        }
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas_ref width="520" height="260" />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[(NaiveDate, f64)], kind: MetricKind) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 36.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.len() < 2 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data yet", width / 2.0 - 36.0, height / 2.0);
        return;
    }

    // y range over the deltas, padded; corrections can push it negative
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, value) in points {
        min = min.min(*value);
        max = max.max(*value);
    }

    let y_range = max - min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    min -= y_padding;
    max += y_padding;

    // Grid and y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 4.0, y + 4.0);
    }

    let x_at = |i: usize| margin_left + (i as f64 / (points.len() - 1) as f64) * chart_width;
    let y_at = |value: f64| margin_top + ((max - value) / (max - min)) * chart_height;

    // Area under the line in the metric accent
    ctx.set_fill_style(&kind.color().into());
    ctx.set_global_alpha(0.2);
    ctx.begin_path();
    ctx.move_to(x_at(0), y_at(points[0].1));
    for (i, (_, value)) in points.iter().enumerate().skip(1) {
        ctx.line_to(x_at(i), y_at(*value));
    }
    ctx.line_to(x_at(points.len() - 1), margin_top + chart_height);
    ctx.line_to(x_at(0), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // The line itself
    ctx.set_stroke_style(&kind.color().into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (_, value)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(*value));
        } else {
            ctx.line_to(x_at(i), y_at(*value));
        }
    }
    ctx.stroke();

    // x-axis date labels
    ctx.set_fill_style(&"#6b7280".into());
    let num_labels = 4;
    for i in 0..=num_labels {
        let index = i * (points.len() - 1) / num_labels;
        let label = points[index].0.format("%m/%d").to_string();
        let _ = ctx.fill_text(&label, x_at(index) - 14.0, height - 12.0);
    }
}
