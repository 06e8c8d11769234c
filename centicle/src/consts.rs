//! Shared constants for the grid model.

use crate::surface::RectStyle;

// ── Geometry ────────────────────────────────────────────────────

/// Edge length of a graticule in degrees.
pub const GRAT_SIZE_DEG: f64 = 1.0;

/// Number of centicles along one edge of a graticule.
pub const CELLS_PER_SIDE: u8 = 10;

/// Number of centicles in a graticule.
pub const CELL_COUNT: u8 = CELLS_PER_SIDE * CELLS_PER_SIDE;

/// Offset from the graticule corner to its center, in degrees.
pub const CENTER_OFFSET_DEG: f64 = 0.5;

// ── Styles ──────────────────────────────────────────────────────

/// Fill opacity of an active centicle.
pub const ACTIVE_FILL_OPACITY: f64 = 0.40;

/// Fill opacity of an inactive centicle.
pub const INACTIVE_FILL_OPACITY: f64 = 0.10;

/// Outline of the whole graticule.
pub const GRAT_STYLE: RectStyle = RectStyle {
    stroke_color: "#0000FF",
    stroke_opacity: 0.8,
    stroke_weight: 1.0,
    fill_color: None,
    fill_opacity: 0.0,
};

/// One centicle in its inactive state.
pub const CELL_STYLE: RectStyle = RectStyle {
    stroke_color: "#FF0000",
    stroke_opacity: 0.8,
    stroke_weight: 0.5,
    fill_color: Some("#FF0000"),
    fill_opacity: INACTIVE_FILL_OPACITY,
};
