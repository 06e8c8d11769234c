//! Rendering: draws the scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the scene and produces pixels; it does not
//! mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use centicle::LatLng;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{BACKGROUND_COLOR, DEGREE_LINE_COLOR, MIN_DEGREE_LINE_SPACING_PX};
use crate::doc::MapRect;
use crate::engine::Scene;

/// Draw the full scene: background, degree lines, rectangles.
///
/// `dpr` is the device pixel ratio; everything else is in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, dpr: f64) -> Result<(), JsValue> {
    let (w, h) = (scene.viewport_width, scene.viewport_height);

    // Layer 1: clear to the map background.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Layer 2: whole-degree reference lines.
    draw_degree_lines(ctx, &scene.camera, w, h);

    // Layer 3: rectangles in creation order (bottom first).
    for (_, rect) in scene.doc.iter() {
        draw_rect(ctx, &scene.camera, rect);
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_degree_lines(ctx: &CanvasRenderingContext2d, camera: &Camera, w: f64, h: f64) {
    if camera.zoom < MIN_DEGREE_LINE_SPACING_PX {
        return;
    }
    let visible = camera.visible_bounds(w, h);

    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(DEGREE_LINE_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();

    let mut lng = visible.west.floor();
    while lng <= visible.east {
        let x = camera.latlng_to_screen(LatLng::new(0.0, lng)).x.round() + 0.5;
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        lng += 1.0;
    }
    let mut lat = visible.south.floor();
    while lat <= visible.north {
        let y = camera.latlng_to_screen(LatLng::new(lat, 0.0)).y.round() + 0.5;
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        lat += 1.0;
    }
    ctx.stroke();
}

fn draw_rect(ctx: &CanvasRenderingContext2d, camera: &Camera, rect: &MapRect) {
    let top_left = camera.latlng_to_screen(rect.bounds.north_west());
    let bottom_right = camera.latlng_to_screen(rect.bounds.south_east());
    let Point { x, y } = top_left;
    let (width, height) = (bottom_right.x - x, bottom_right.y - y);

    if let Some(fill) = rect.style.fill_color {
        ctx.set_global_alpha(rect.fill_opacity);
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(x, y, width, height);
    }

    ctx.set_global_alpha(rect.style.stroke_opacity);
    ctx.set_stroke_style_str(rect.style.stroke_color);
    ctx.set_line_width(rect.style.stroke_weight);
    ctx.stroke_rect(x, y, width, height);
}
