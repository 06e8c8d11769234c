use centicle::query::DEFAULT_START;
use centicle::{Bounds, Centicle, ClickEvent, ClickTarget, Graticule, GridOverlay, LatLng, MapSurface, OverlayUpdate, RectStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{CLICK_SLOP_PX, CURSOR_DEFAULT, CURSOR_PANNING, WHEEL_ZOOM_STEP};
use crate::doc::{RectId, RectStore};
use crate::hit::hit_test;
use crate::input::{Button, InputState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The grid moved; update the latitude/longitude readout.
    OriginChanged(Graticule),
    /// A cell was toggled; update the active-cell list. Ascending.
    ActiveCellsChanged(Vec<Centicle>),
    SetCursor(String),
    RenderNeeded,
}

/// Everything drawn on the canvas: rectangles, camera and viewport size.
///
/// This is the [`MapSurface`] the grid overlay talks to.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub doc: RectStore,
    pub camera: Camera,
    pub viewport_width: f64,
    pub viewport_height: f64,
    map_clickable: bool,
}

impl Scene {
    /// Resize the viewport, keeping the geographic point at its center.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        let center = self.center();
        self.viewport_width = width;
        self.viewport_height = height;
        self.camera.center_on(center, width, height);
    }

    /// Geographic point at the middle of the viewport.
    #[must_use]
    pub fn center(&self) -> LatLng {
        self.camera
            .screen_to_latlng(Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5))
    }

    /// Resolve a click at a screen point.
    #[must_use]
    pub fn hit(&self, screen_pt: Point) -> Option<ClickEvent<RectId>> {
        hit_test(screen_pt, &self.doc, &self.camera, self.map_clickable)
    }

    /// Whether clicks on empty map are reported.
    #[must_use]
    pub fn map_clickable(&self) -> bool {
        self.map_clickable
    }
}

impl MapSurface for Scene {
    type Rect = RectId;

    fn create_rectangle(&mut self, bounds: Bounds, style: &RectStyle) -> RectId {
        self.doc.insert(bounds, style)
    }

    fn set_bounds(&mut self, rect: RectId, bounds: Bounds) {
        if let Some(r) = self.doc.get_mut(rect) {
            r.bounds = bounds;
        }
    }

    fn set_fill_opacity(&mut self, rect: RectId, opacity: f64) {
        if let Some(r) = self.doc.get_mut(rect) {
            r.fill_opacity = opacity;
        }
    }

    fn subscribe_click(&mut self, target: ClickTarget<RectId>) {
        match target {
            ClickTarget::Map => self.map_clickable = true,
            ClickTarget::Rect(id) => {
                if let Some(r) = self.doc.get_mut(id) {
                    r.clickable = true;
                }
            }
        }
    }

    fn pan_to(&mut self, center: LatLng) {
        self.camera.center_on(center, self.viewport_width, self.viewport_height);
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub overlay: GridOverlay<Scene>,
    pub input: InputState,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(DEFAULT_START)
    }
}

impl EngineCore {
    /// Build the grid around `start` and center the view on its graticule.
    #[must_use]
    pub fn new(start: LatLng) -> Self {
        Self { overlay: GridOverlay::new(Scene::default(), start), input: InputState::Idle, dpr: 1.0 }
    }

    /// Actions that bring a freshly mounted host in line with the engine.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        vec![
            Action::OriginChanged(self.overlay.origin()),
            Action::ActiveCellsChanged(self.overlay.list_active_indices()),
            Action::SetCursor(CURSOR_DEFAULT.to_owned()),
            Action::RenderNeeded,
        ]
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.overlay.surface_mut().set_viewport(width_css, height_css);
        self.dpr = dpr;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => {
                self.input = InputState::Pressed { start_screen: screen_pt };
                Vec::new()
            }
            Button::Middle => {
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor(CURSOR_PANNING.to_owned())]
            }
            Button::Secondary => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Pressed { start_screen } => {
                if start_screen.dist(screen_pt) <= CLICK_SLOP_PX {
                    return Vec::new();
                }
                self.pan(start_screen, screen_pt);
                vec![Action::SetCursor(CURSOR_PANNING.to_owned()), Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                self.pan(last_screen, screen_pt);
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Secondary {
            return Vec::new();
        }
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Pressed { .. } => self.click_at(screen_pt),
            InputState::Panning { .. } => vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())],
        }
    }

    /// Abandon any gesture in progress, e.g. when the pointer leaves the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Panning { .. } => vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())],
            InputState::Idle | InputState::Pressed { .. } => Vec::new(),
        }
    }

    /// Zoom around the pointer. Positive `dy` zooms out.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let factor = (-delta.dy * WHEEL_ZOOM_STEP).exp();
        if self.overlay.surface_mut().camera.zoom_at(screen_pt, factor) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Deliver a click at `screen_pt` to the overlay.
    pub fn click_at(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(event) = self.overlay.surface().hit(screen_pt) else {
            return Vec::new();
        };
        match self.overlay.handle_click(event) {
            Some(OverlayUpdate::Origin(origin)) => {
                log::info!("grid moved to {origin}");
                vec![Action::OriginChanged(origin), Action::RenderNeeded]
            }
            Some(OverlayUpdate::ActiveCells(cells)) => vec![Action::ActiveCellsChanged(cells), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    fn pan(&mut self, from: Point, to: Point) {
        self.overlay.surface_mut().camera.pan_by(to.x - from.x, to.y - from.y);
        self.input = InputState::Panning { last_screen: to };
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.overlay.surface()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.scene().camera
    }

    #[must_use]
    pub fn origin(&self) -> Graticule {
        self.overlay.origin()
    }

    #[must_use]
    pub fn active_cells(&self) -> Vec<Centicle> {
        self.overlay.list_active_indices()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, start: LatLng) -> Self {
        Self { canvas, core: EngineCore::new(start) }
    }

    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        self.core.initial_actions()
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to device pixels.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.canvas.set_width(device_px(width_css, dpr));
        self.canvas.set_height(device_px(height_css, dpr));
        self.core.set_viewport(width_css, height_css, dpr)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from(js_sys::Error::new("2d context unavailable")))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, self.core.scene(), self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn origin(&self) -> Graticule {
        self.core.origin()
    }

    #[must_use]
    pub fn active_cells(&self) -> Vec<Centicle> {
        self.core.active_cells()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(1.0, f64::from(u32::MAX)) as u32
}
