#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use centicle::{Bounds, LatLng};

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
///
/// World space is `x = lng`, `y = -lat` in degrees, so north is up on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dist(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Camera state for pan/zoom over the degree plane.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is CSS pixels per degree.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: DEFAULT_ZOOM }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to degrees.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    #[must_use]
    pub fn latlng_to_screen(&self, point: LatLng) -> Point {
        self.world_to_screen(latlng_to_world(point))
    }

    #[must_use]
    pub fn screen_to_latlng(&self, screen: Point) -> LatLng {
        world_to_latlng(self.screen_to_world(screen))
    }

    /// Pan so `center` sits in the middle of a `width` × `height` viewport.
    pub fn center_on(&mut self, center: LatLng, width: f64, height: f64) {
        let world = latlng_to_world(center);
        self.pan_x = width * 0.5 - world.x * self.zoom;
        self.pan_y = height * 0.5 - world.y * self.zoom;
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Scale by `factor` keeping the world point under `anchor` fixed.
    ///
    /// The result is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Returns whether
    /// the zoom changed.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        let zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if !zoom.is_finite() || (zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        let world = self.screen_to_world(anchor);
        self.zoom = zoom;
        self.pan_x = anchor.x - world.x * zoom;
        self.pan_y = anchor.y - world.y * zoom;
        true
    }

    /// Geographic rectangle covered by a `width` × `height` viewport.
    #[must_use]
    pub fn visible_bounds(&self, width: f64, height: f64) -> Bounds {
        Bounds::from_corners(
            self.screen_to_latlng(Point::new(0.0, 0.0)),
            self.screen_to_latlng(Point::new(width, height)),
        )
    }
}

/// Place a geographic point on the degree plane.
#[must_use]
pub fn latlng_to_world(point: LatLng) -> Point {
    Point::new(point.lng, -point.lat)
}

#[must_use]
pub fn world_to_latlng(world: Point) -> LatLng {
    LatLng::new(-world.y, world.x)
}
