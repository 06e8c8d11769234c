//! Grid overlay controller: one graticule outline plus 100 toggleable cells.
//!
//! [`GridOverlay`] is the whole interactive state of the page. The host owns
//! it and feeds it [`ClickEvent`]s from its surface; each handled click
//! yields an [`OverlayUpdate`] for the host's text outputs.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::{ACTIVE_FILL_OPACITY, CELL_STYLE, GRAT_STYLE, INACTIVE_FILL_OPACITY};
use crate::coord::{Centicle, Graticule, LatLng, cell_bounds, grat_bounds};
use crate::surface::{ClickEvent, ClickTarget, MapSurface};

/// A surface rectangle paired with its toggle flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState<H> {
    pub handle: H,
    pub active: bool,
}

/// Display change produced by a handled click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayUpdate {
    /// The grid moved to a new graticule.
    Origin(Graticule),
    /// The set of active cells changed; ascending.
    ActiveCells(Vec<Centicle>),
}

/// Grid state for one map: origin, outline, and the 100 cells.
///
/// Cells are created once; their toggle flags survive origin changes.
pub struct GridOverlay<S: MapSurface> {
    surface: S,
    origin: Graticule,
    center: LatLng,
    grat: S::Rect,
    cells: Vec<CellState<S::Rect>>,
}

impl<S: MapSurface> GridOverlay<S> {
    /// Build the outline and cells around `start` and center the surface on them.
    pub fn new(mut surface: S, start: LatLng) -> Self {
        let origin = Graticule::containing(start);
        let grat = surface.create_rectangle(grat_bounds(origin), &GRAT_STYLE);
        surface.subscribe_click(ClickTarget::Map);

        let cells = Centicle::all()
            .map(|index| {
                let handle = surface.create_rectangle(cell_bounds(origin, index), &CELL_STYLE);
                surface.subscribe_click(ClickTarget::Rect(handle));
                CellState { handle, active: false }
            })
            .collect();

        let center = origin.center();
        surface.pan_to(center);
        log::debug!("grid overlay created at graticule {origin}");

        Self { surface, origin, center, grat, cells }
    }

    /// Re-anchor the grid on the graticule containing `point`.
    ///
    /// Moves the outline and every cell; toggle flags are kept.
    pub fn set_origin(&mut self, point: LatLng) -> Graticule {
        self.origin = Graticule::containing(point);
        self.center = self.origin.center();
        self.rebuild_grat_bounds();
        for index in Centicle::all() {
            self.rebuild_cell_bounds(index);
        }
        log::debug!("grid origin moved to {}", self.origin);
        self.origin
    }

    pub fn rebuild_grat_bounds(&mut self) {
        self.surface.set_bounds(self.grat, grat_bounds(self.origin));
    }

    pub fn rebuild_cell_bounds(&mut self, index: Centicle) {
        let handle = self.cell(index).handle;
        self.surface.set_bounds(handle, cell_bounds(self.origin, index));
    }

    /// Flip a cell and restyle it. Returns the new flag.
    pub fn toggle_cell(&mut self, index: Centicle) -> bool {
        let cell = &mut self.cells[usize::from(index.get())];
        cell.active = !cell.active;
        let (handle, active) = (cell.handle, cell.active);
        let opacity = if active { ACTIVE_FILL_OPACITY } else { INACTIVE_FILL_OPACITY };
        self.surface.set_fill_opacity(handle, opacity);
        active
    }

    #[must_use]
    pub fn is_active(&self, index: Centicle) -> bool {
        self.cell(index).active
    }

    /// Active cells in ascending order.
    #[must_use]
    pub fn list_active_indices(&self) -> Vec<Centicle> {
        Centicle::all().filter(|&index| self.is_active(index)).collect()
    }

    /// Active indices joined by single spaces, e.g. `"3 32 99"`.
    #[must_use]
    pub fn active_label(&self) -> String {
        active_label(&self.list_active_indices())
    }

    /// Dispatch a surface click.
    ///
    /// A map click re-anchors the grid and pans to it. A cell click toggles
    /// the cell whose rectangle the surface hit, so a click on a graticule's
    /// far edge stays in the last row or column. Clicks on other rectangles
    /// are ignored.
    pub fn handle_click(&mut self, event: ClickEvent<S::Rect>) -> Option<OverlayUpdate> {
        match event.target {
            ClickTarget::Map => {
                let origin = self.set_origin(event.point);
                self.surface.pan_to(self.center);
                Some(OverlayUpdate::Origin(origin))
            }
            ClickTarget::Rect(handle) => {
                let Some(index) = self.cell_at_handle(handle) else {
                    log::trace!("ignoring click on non-cell rectangle {handle:?}");
                    return None;
                };
                let active = self.toggle_cell(index);
                log::debug!("cell {index} toggled {} at {}", if active { "on" } else { "off" }, event.point);
                Some(OverlayUpdate::ActiveCells(self.list_active_indices()))
            }
        }
    }

    fn cell_at_handle(&self, handle: S::Rect) -> Option<Centicle> {
        Centicle::all().find(|&index| self.cell(index).handle == handle)
    }

    /// Current graticule.
    #[must_use]
    pub fn origin(&self) -> Graticule {
        self.origin
    }

    /// Center of the current graticule.
    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn cell(&self, index: Centicle) -> &CellState<S::Rect> {
        &self.cells[usize::from(index.get())]
    }

    /// Handle of the graticule outline.
    #[must_use]
    pub fn grat_handle(&self) -> S::Rect {
        self.grat
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Join indices with single spaces, without zero padding.
#[must_use]
pub fn active_label(indices: &[Centicle]) -> String {
    indices.iter().map(|c| c.get().to_string()).collect::<Vec<_>>().join(" ")
}
