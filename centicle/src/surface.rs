//! Map surface capability set consumed by the grid overlay.
//!
//! A surface creates styled rectangles, moves them, changes their fill, pans
//! its view and reports clicks. [`MemorySurface`] keeps everything in memory
//! and is used by the CLI and by tests; the browser engine in the `canvas`
//! crate is the interactive one.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::fmt;

use crate::coord::{Bounds, LatLng};

/// Stroke and fill of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub stroke_color: &'static str,
    pub stroke_opacity: f64,
    pub stroke_weight: f64,
    /// `None` draws the outline only.
    pub fill_color: Option<&'static str>,
    pub fill_opacity: f64,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<R> {
    /// Empty map, outside every click-subscribed rectangle.
    Map,
    Rect(R),
}

/// A click reported by a surface, with the geographic point under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent<R> {
    pub target: ClickTarget<R>,
    pub point: LatLng,
}

/// Rendering and event capabilities the overlay needs from a map.
pub trait MapSurface {
    /// Handle to a rectangle owned by the surface.
    type Rect: Copy + Eq + fmt::Debug;

    /// Add a rectangle and return its handle.
    fn create_rectangle(&mut self, bounds: Bounds, style: &RectStyle) -> Self::Rect;

    /// Move an existing rectangle.
    fn set_bounds(&mut self, rect: Self::Rect, bounds: Bounds);

    /// Change the fill opacity of an existing rectangle.
    fn set_fill_opacity(&mut self, rect: Self::Rect, opacity: f64);

    /// Start reporting clicks on `target`.
    fn subscribe_click(&mut self, target: ClickTarget<Self::Rect>);

    /// Center the view on `center`.
    fn pan_to(&mut self, center: LatLng);
}

/// Handle into a [`MemorySurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryRectId(usize);

/// Rectangle state held by a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRect {
    pub bounds: Bounds,
    pub style: RectStyle,
    pub fill_opacity: f64,
    pub clickable: bool,
}

/// Headless surface that records rectangles and answers clicks by hit-testing.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    rects: Vec<MemoryRect>,
    map_clickable: bool,
    center: Option<LatLng>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rect(&self, id: MemoryRectId) -> Option<&MemoryRect> {
        self.rects.get(id.0)
    }

    /// Rectangles in creation order, bottom first.
    pub fn rects(&self) -> impl DoubleEndedIterator<Item = (MemoryRectId, &MemoryRect)> {
        self.rects.iter().enumerate().map(|(i, r)| (MemoryRectId(i), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Last point passed to [`MapSurface::pan_to`].
    #[must_use]
    pub fn center(&self) -> Option<LatLng> {
        self.center
    }

    /// Resolve a click at `point` the way an interactive map would: the
    /// topmost click-subscribed rectangle containing it, else the map.
    ///
    /// Returns `None` when nothing under the point is subscribed.
    #[must_use]
    pub fn click(&self, point: LatLng) -> Option<ClickEvent<MemoryRectId>> {
        let hit = self
            .rects()
            .rev()
            .find(|(_, r)| r.clickable && r.bounds.contains(point))
            .map(|(id, _)| ClickTarget::Rect(id));
        let target = hit.or(self.map_clickable.then_some(ClickTarget::Map))?;
        Some(ClickEvent { target, point })
    }
}

impl MapSurface for MemorySurface {
    type Rect = MemoryRectId;

    fn create_rectangle(&mut self, bounds: Bounds, style: &RectStyle) -> Self::Rect {
        self.rects.push(MemoryRect { bounds, style: *style, fill_opacity: style.fill_opacity, clickable: false });
        MemoryRectId(self.rects.len() - 1)
    }

    fn set_bounds(&mut self, rect: Self::Rect, bounds: Bounds) {
        if let Some(r) = self.rects.get_mut(rect.0) {
            r.bounds = bounds;
        }
    }

    fn set_fill_opacity(&mut self, rect: Self::Rect, opacity: f64) {
        if let Some(r) = self.rects.get_mut(rect.0) {
            r.fill_opacity = opacity;
        }
    }

    fn subscribe_click(&mut self, target: ClickTarget<Self::Rect>) {
        match target {
            ClickTarget::Map => self.map_clickable = true,
            ClickTarget::Rect(id) => {
                if let Some(r) = self.rects.get_mut(id.0) {
                    r.clickable = true;
                }
            }
        }
    }

    fn pan_to(&mut self, center: LatLng) {
        self.center = Some(center);
    }
}
