//! Case Map Component
//!
//! Canvas world map: one translucent circle per country, centered on the
//! country's coordinates and sized by the square root of the active metric.
//! The viewport (center + zoom) comes from the controller and is redrawn
//! whenever it, the country list, or the active metric changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{Country, GlobalState, MetricKind, Viewport};

/// Case map component
#[component]
pub fn CaseMap() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the countries, viewport, or active metric change
    create_effect(move |_| {
        let countries = state.countries.get();
        let viewport = state.viewport.get();
        let kind = state.metric.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_map(&canvas, &countries, &viewport, kind);
        }
    });

    view! {
        <div class="case-map">
            <canvas node_ref=canvas_ref width="760" height="420" />
        </div>
    }
}

/// Pixels per degree of longitude at the given zoom level.
fn pixels_per_degree(width: f64, zoom: f64) -> f64 {
    (width / 360.0) * (zoom - 2.0).exp2()
}

/// Project a coordinate to canvas pixels, equirectangular around the
/// viewport center.
fn project(viewport: &Viewport, width: f64, height: f64, lat: f64, long: f64) -> (f64, f64) {
    let scale = pixels_per_degree(width, viewport.zoom);
    let x = width / 2.0 + (long - viewport.long) * scale;
    let y = height / 2.0 - (lat - viewport.lat) * scale;
    (x, y)
}

/// Draw the map on canvas
fn draw_map(
    canvas: &HtmlCanvasElement,
    countries: &[Country],
    viewport: &Viewport,
    kind: MetricKind,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Ocean background
    ctx.set_fill_style(&"#d7e8f5".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Graticule every 30 degrees
    ctx.set_stroke_style(&"#b9d2e6".into());
    ctx.set_line_width(1.0);

    let mut long = -180.0;
    while long <= 180.0 {
        let (x, _) = project(viewport, width, height, 0.0, long);
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
        long += 30.0;
    }

    let mut lat = -60.0;
    while lat <= 90.0 {
        let (_, y) = project(viewport, width, height, lat, 0.0);
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
        lat += 30.0;
    }

    // Equator slightly stronger
    ctx.set_stroke_style(&"#a3c4dc".into());
    let (_, equator_y) = project(viewport, width, height, 0.0, 0.0);
    ctx.begin_path();
    ctx.move_to(0.0, equator_y);
    ctx.line_to(width, equator_y);
    ctx.stroke();

    // One circle per country, sized by the active metric
    let zoom_scale = (viewport.zoom - 3.0).exp2();
    ctx.set_stroke_style(&kind.color().into());

    for country in countries {
        let info = &country.country_info;
        if info.lat == 0.0 && info.long == 0.0 {
            continue;
        }

        let (x, y) = project(viewport, width, height, info.lat, info.long);
        if x < -width || x > width * 2.0 || y < -height || y > height * 2.0 {
            continue;
        }

        let radius = (country.metric(kind).max(0.0).sqrt() * kind.radius_scale() * zoom_scale)
            .max(1.5);

        ctx.set_global_alpha(0.25);
        ctx.set_fill_style(&kind.color().into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_global_alpha(0.9);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.stroke();
    }

    ctx.set_global_alpha(1.0);
}
