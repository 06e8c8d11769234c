//! Canvas sizing and drawing glue between Leptos and `canvas::Engine`.

use canvas::engine::{Action, Engine};
use leptos::prelude::*;

/// Push the canvas element's CSS size and the device pixel ratio into the
/// engine when either changed.
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) -> Vec<Action> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(canvas) = canvas_ref.get() else {
        return Vec::new();
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);

    let scene = engine.core.scene();
    let unchanged = (scene.viewport_width - width).abs() < f64::EPSILON
        && (scene.viewport_height - height).abs() < f64::EPSILON
        && (engine.core.dpr - dpr).abs() < f64::EPSILON;
    if unchanged {
        return Vec::new();
    }
    engine.set_viewport(width, height, dpr)
}

pub fn render(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::warn!("canvas render failed: {e:?}");
    }
}
