//! Document model: the rectangles on the map and the store that owns them.
//!
//! Rectangles are created once by the overlay and then only moved or
//! restyled, so the store is an append-only vector and a [`RectId`] is an
//! index into it. Creation order is draw order: later rectangles paint over
//! earlier ones and win hit tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use centicle::{Bounds, RectStyle};

/// Handle to a rectangle in a [`RectStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RectId(usize);

/// A rectangle as drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRect {
    /// Geographic extent.
    pub bounds: Bounds,
    /// Stroke and base fill.
    pub style: RectStyle,
    /// Current fill opacity; starts at `style.fill_opacity`.
    pub fill_opacity: f64,
    /// Whether clicks on this rectangle are reported.
    pub clickable: bool,
}

/// In-memory rectangle store.
#[derive(Debug, Clone, Default)]
pub struct RectStore {
    rects: Vec<MapRect>,
}

impl RectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle on top of the existing ones.
    pub fn insert(&mut self, bounds: Bounds, style: &RectStyle) -> RectId {
        self.rects.push(MapRect { bounds, style: *style, fill_opacity: style.fill_opacity, clickable: false });
        RectId(self.rects.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: RectId) -> Option<&MapRect> {
        self.rects.get(id.0)
    }

    pub fn get_mut(&mut self, id: RectId) -> Option<&mut MapRect> {
        let rect = self.rects.get_mut(id.0);
        if rect.is_none() {
            log::warn!("unknown rectangle {id:?}");
        }
        rect
    }

    /// Rectangles in draw order, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (RectId, &MapRect)> {
        self.rects.iter().enumerate().map(|(i, r)| (RectId(i), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
