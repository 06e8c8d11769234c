#![allow(clippy::float_cmp)]

use centicle::consts::{ACTIVE_FILL_OPACITY, CELL_COUNT, INACTIVE_FILL_OPACITY};

use super::*;
use crate::consts::DEFAULT_ZOOM;

// =============================================================
// Helpers
// =============================================================

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn core_at(lat: f64, lng: f64) -> EngineCore {
    let mut core = EngineCore::new(LatLng::new(lat, lng));
    core.set_viewport(WIDTH, HEIGHT, 1.0);
    core
}

fn screen(core: &EngineCore, lat: f64, lng: f64) -> Point {
    core.camera().latlng_to_screen(LatLng::new(lat, lng))
}

fn click(core: &mut EngineCore, pt: Point) -> Vec<Action> {
    core.on_pointer_down(pt, Button::Primary);
    core.on_pointer_up(pt, Button::Primary)
}

fn cells(raw: &[u8]) -> Vec<Centicle> {
    raw.iter().map(|&i| Centicle::new(i).unwrap()).collect()
}

fn grat(raw: &str) -> Graticule {
    raw.parse().unwrap()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_engine_builds_outline_and_cells() {
    let core = core_at(40.5, -73.5);
    assert_eq!(core.scene().doc.len(), 1 + usize::from(CELL_COUNT));
    assert!(core.scene().map_clickable());
    assert_eq!(core.origin(), grat("40,-73"));
    assert!(core.active_cells().is_empty());
}

#[test]
fn new_engine_centers_graticule() {
    let core = core_at(40.2, -73.9);
    let center = screen(&core, 40.5, -73.5);
    assert!(approx_eq(center.x, WIDTH / 2.0));
    assert!(approx_eq(center.y, HEIGHT / 2.0));
    assert_eq!(core.camera().zoom, DEFAULT_ZOOM);
}

#[test]
fn default_engine_starts_at_null_island() {
    let core = EngineCore::default();
    assert_eq!(core.origin(), grat("0,0"));
}

#[test]
fn initial_actions_describe_state() {
    let core = core_at(40.5, -73.5);
    let actions = core.initial_actions();
    assert_eq!(actions[0], Action::OriginChanged(grat("40,-73")));
    assert_eq!(actions[1], Action::ActiveCellsChanged(Vec::new()));
    assert!(actions.contains(&Action::RenderNeeded));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_keeps_center() {
    let mut core = core_at(40.5, -73.5);
    let before = core.scene().center();
    let actions = core.set_viewport(1024.0, 300.0, 2.0);
    let after = core.scene().center();
    assert!(approx_eq(before.lat, after.lat));
    assert!(approx_eq(before.lng, after.lng));
    assert_eq!(core.dpr, 2.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn cell_click_toggles_cell() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 40.35, -73.72);
    let actions = click(&mut core, pt);
    assert_eq!(actions, vec![Action::ActiveCellsChanged(cells(&[37])), Action::RenderNeeded]);
}

#[test]
fn second_click_untoggles() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 40.35, -73.72);
    click(&mut core, pt);
    let actions = click(&mut core, pt);
    assert_eq!(actions[0], Action::ActiveCellsChanged(Vec::new()));
}

#[test]
fn cell_click_changes_fill_opacity() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 40.35, -73.72);
    let handle = core.overlay.cell(Centicle::new(37).unwrap()).handle;
    assert_eq!(core.scene().doc.get(handle).unwrap().fill_opacity, INACTIVE_FILL_OPACITY);
    click(&mut core, pt);
    assert_eq!(core.scene().doc.get(handle).unwrap().fill_opacity, ACTIVE_FILL_OPACITY);
}

#[test]
fn several_cells_list_ascending() {
    let mut core = core_at(40.5, -73.5);
    for (lat, lng) in [(40.95, -73.95), (40.05, -73.05), (40.35, -73.72)] {
        let pt = screen(&core, lat, lng);
        click(&mut core, pt);
    }
    assert_eq!(core.active_cells(), cells(&[0, 37, 99]));
}

#[test]
fn map_click_moves_grid() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 42.3, -75.6);
    let actions = click(&mut core, pt);
    let origin = grat("42,-75");
    assert_eq!(actions, vec![Action::OriginChanged(origin), Action::RenderNeeded]);
    assert_eq!(core.origin(), origin);

    let center = screen(&core, 42.5, -75.5);
    assert!(approx_eq(center.x, WIDTH / 2.0));
    assert!(approx_eq(center.y, HEIGHT / 2.0));
}

#[test]
fn toggles_survive_origin_change() {
    let mut core = core_at(40.5, -73.5);
    let cell = screen(&core, 40.35, -73.72);
    click(&mut core, cell);
    let elsewhere = screen(&core, 42.3, -75.6);
    click(&mut core, elsewhere);
    assert_eq!(core.active_cells(), cells(&[37]));
}

#[test]
fn map_click_south_of_equator_keeps_sign() {
    let mut core = core_at(0.5, 0.5);
    let pt = screen(&core, -0.3, 0.2);
    let actions = click(&mut core, pt);
    let Action::OriginChanged(origin) = actions[0] else {
        panic!("expected origin change, got {actions:?}");
    };
    assert!(origin.lat().is_sign_negative());
    assert_eq!(origin.to_string(), "-0,0");
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn small_jitter_is_still_a_click() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 40.35, -73.72);
    core.on_pointer_down(pt, Button::Primary);
    let moved = core.on_pointer_move(Point::new(pt.x + 2.0, pt.y + 1.0));
    assert!(moved.is_empty());
    let actions = core.on_pointer_up(Point::new(pt.x + 2.0, pt.y + 1.0), Button::Primary);
    assert_eq!(actions[0], Action::ActiveCellsChanged(cells(&[37])));
}

#[test]
fn drag_pans_without_clicking() {
    let mut core = core_at(40.5, -73.5);
    let start = Point::new(400.0, 300.0);
    let cam_before = core.camera();

    core.on_pointer_down(start, Button::Primary);
    let actions = core.on_pointer_move(Point::new(450.0, 280.0));
    assert_eq!(actions, vec![Action::SetCursor(CURSOR_PANNING.to_owned()), Action::RenderNeeded]);
    assert!(matches!(core.input, InputState::Panning { .. }));

    core.on_pointer_move(Point::new(460.0, 300.0));
    let released = core.on_pointer_up(Point::new(460.0, 300.0), Button::Primary);
    assert_eq!(released, vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]);

    let cam = core.camera();
    assert!(approx_eq(cam.pan_x - cam_before.pan_x, 60.0));
    assert!(approx_eq(cam.pan_y - cam_before.pan_y, 0.0));
    assert!(core.active_cells().is_empty());
    assert_eq!(core.origin(), grat("40,-73"));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn middle_button_pans_immediately() {
    let mut core = core_at(40.5, -73.5);
    let down = core.on_pointer_down(Point::new(10.0, 10.0), Button::Middle);
    assert_eq!(down, vec![Action::SetCursor(CURSOR_PANNING.to_owned())]);
    let moved = core.on_pointer_move(Point::new(11.0, 10.0));
    assert_eq!(moved, vec![Action::RenderNeeded]);
    let up = core.on_pointer_up(Point::new(11.0, 10.0), Button::Middle);
    assert_eq!(up, vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]);
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = core_at(40.5, -73.5);
    assert!(core.on_pointer_down(Point::new(400.0, 300.0), Button::Secondary).is_empty());
    assert_eq!(core.input, InputState::Idle);
    assert!(core.on_pointer_up(Point::new(400.0, 300.0), Button::Secondary).is_empty());
}

#[test]
fn move_without_press_does_nothing() {
    let mut core = core_at(40.5, -73.5);
    assert!(core.on_pointer_move(Point::new(100.0, 100.0)).is_empty());
}

#[test]
fn release_without_press_does_nothing() {
    let mut core = core_at(40.5, -73.5);
    assert!(core.on_pointer_up(Point::new(400.0, 300.0), Button::Primary).is_empty());
}

#[test]
fn leaving_cancels_pending_click() {
    let mut core = core_at(40.5, -73.5);
    let pt = screen(&core, 40.35, -73.72);
    core.on_pointer_down(pt, Button::Primary);
    assert!(core.on_pointer_leave().is_empty());
    assert!(core.on_pointer_up(pt, Button::Primary).is_empty());
    assert!(core.active_cells().is_empty());
}

#[test]
fn leaving_while_panning_resets_cursor() {
    let mut core = core_at(40.5, -73.5);
    core.on_pointer_down(Point::new(10.0, 10.0), Button::Middle);
    assert_eq!(core.on_pointer_leave(), vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]);
    assert_eq!(core.input, InputState::Idle);
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_around_pointer() {
    let mut core = core_at(40.5, -73.5);
    let anchor = Point::new(123.0, 456.0);
    let before = core.camera().screen_to_latlng(anchor);
    let actions = core.on_wheel(anchor, WheelDelta { dx: 0.0, dy: -100.0 });
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(core.camera().zoom > DEFAULT_ZOOM);
    let after = core.camera().screen_to_latlng(anchor);
    assert!(approx_eq(before.lat, after.lat));
    assert!(approx_eq(before.lng, after.lng));
}

#[test]
fn wheel_down_zooms_out() {
    let mut core = core_at(40.5, -73.5);
    core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 0.0, dy: 100.0 });
    assert!(core.camera().zoom < DEFAULT_ZOOM);
}

#[test]
fn horizontal_wheel_does_not_zoom() {
    let mut core = core_at(40.5, -73.5);
    let actions = core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 30.0, dy: 0.0 });
    assert!(actions.is_empty());
    assert_eq!(core.camera().zoom, DEFAULT_ZOOM);
}

#[test]
fn clicks_after_zoom_hit_the_same_cell() {
    let mut core = core_at(40.5, -73.5);
    core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 0.0, dy: -400.0 });
    let pt = screen(&core, 40.35, -73.72);
    click(&mut core, pt);
    assert_eq!(core.active_cells(), cells(&[37]));
}

// =============================================================
// Scene as a map surface
// =============================================================

#[test]
fn scene_pan_to_centers_viewport() {
    let mut scene = Scene::default();
    scene.set_viewport(200.0, 100.0);
    scene.pan_to(LatLng::new(-10.5, 20.5));
    let c = scene.center();
    assert!(approx_eq(c.lat, -10.5));
    assert!(approx_eq(c.lng, 20.5));
}

#[test]
fn scene_reports_nothing_until_subscribed() {
    let mut scene = Scene::default();
    scene.set_viewport(200.0, 100.0);
    assert!(scene.hit(Point::new(50.0, 50.0)).is_none());
    scene.subscribe_click(ClickTarget::Map);
    assert_eq!(scene.hit(Point::new(50.0, 50.0)).unwrap().target, ClickTarget::Map);
}
