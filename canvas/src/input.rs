//! Input model: mouse buttons, wheel deltas, and the gesture state machine.
//!
//! A primary-button press starts in [`InputState::Pressed`]. Moving the
//! pointer further than [`crate::consts::CLICK_SLOP_PX`] turns it into
//! [`InputState::Panning`]; releasing before that is a click. The middle
//! button pans immediately and never clicks.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down, zooms out).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Primary button is down and the pointer has stayed within the click slop.
    Pressed {
        /// Screen-space position of the pointer-down.
        start_screen: Point,
    },
    /// The user is dragging the map.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// Whether a button is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
