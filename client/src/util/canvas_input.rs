//! DOM event decoding for the canvas engine.

use canvas::camera::Point as CanvasPoint;
use canvas::input::{Button as CanvasButton, WheelDelta};

/// Map a DOM `MouseEvent.button` code; unknown buttons count as primary.
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Wheel delta in pixels, whatever unit the browser reported.
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    // DOM_DELTA_LINE = 1, DOM_DELTA_PAGE = 2
    let scale = match ev.delta_mode() {
        1 => 16.0,
        2 => 400.0,
        _ => 1.0,
    };
    WheelDelta { dx: ev.delta_x() * scale, dy: ev.delta_y() * scale }
}
