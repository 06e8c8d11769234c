//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Initial scale in CSS pixels per degree, about web-map zoom level 8
/// (256 · 2⁸ / 360).
pub const DEFAULT_ZOOM: f64 = 182.0;

/// Smallest scale; the whole world is about 65 px wide.
pub const MIN_ZOOM: f64 = 0.18;

/// Largest scale; one centicle is about 2000 px wide.
pub const MAX_ZOOM: f64 = 20_000.0;

/// Zoom factor per wheel pixel, applied as `exp(-dy * step)`.
pub const WHEEL_ZOOM_STEP: f64 = 0.0015;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in screen pixels before a press turns into a pan.
pub const CLICK_SLOP_PX: f64 = 4.0;

// ── Rendering ───────────────────────────────────────────────────

/// Plain map background.
pub const BACKGROUND_COLOR: &str = "#F2EFE9";

/// Whole-degree reference lines.
pub const DEGREE_LINE_COLOR: &str = "rgba(0, 0, 0, 0.12)";

/// Degree lines closer together than this (in pixels) are skipped.
pub const MIN_DEGREE_LINE_SPACING_PX: f64 = 6.0;

// ── Cursors ─────────────────────────────────────────────────────

pub const CURSOR_DEFAULT: &str = "crosshair";
pub const CURSOR_PANNING: &str = "grabbing";
