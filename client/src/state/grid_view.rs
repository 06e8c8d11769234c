//! What the page's text outputs show about the grid.
//!
//! DESIGN
//! ======
//! The canvas engine owns the overlay. `MapHost` copies origin and active-cell
//! changes out of engine actions into this struct so the readout components
//! render without touching the engine.

#[cfg(test)]
#[path = "grid_view_test.rs"]
mod grid_view_test;

use centicle::overlay::active_label;
use centicle::{Centicle, Graticule};

/// Displayed grid origin and active centicles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridViewState {
    /// Current graticule; `None` until the engine has started.
    pub origin: Option<Graticule>,
    /// Active centicles, ascending.
    pub active: Vec<Centicle>,
}

impl GridViewState {
    pub fn set_origin(&mut self, origin: Graticule) {
        self.origin = Some(origin);
    }

    pub fn set_active(&mut self, active: Vec<Centicle>) {
        self.active = active;
    }

    /// Latitude readout; `-0` is shown as such.
    #[must_use]
    pub fn lat_label(&self) -> String {
        self.origin.map(|g| g.lat().to_string()).unwrap_or_default()
    }

    #[must_use]
    pub fn lng_label(&self) -> String {
        self.origin.map(|g| g.lng().to_string()).unwrap_or_default()
    }

    /// Active indices joined by spaces, e.g. `"3 32 99"`.
    #[must_use]
    pub fn active_label(&self) -> String {
        active_label(&self.active)
    }
}
