//! Command results, printable as text or JSON.

use std::collections::BTreeSet;
use std::fmt;

use centicle::coord::{cell_bounds, cell_index_from_point};
use centicle::geohash::{self, DowOpens, Geohash, format_date};
use centicle::overlay::active_label;
use centicle::surface::MemorySurface;
use centicle::watch::{self, Expedition, WatchList};
use centicle::{Bounds, Centicle, Graticule, GridOverlay, LatLng};
use serde::Serialize;
use time::Date;

use crate::error::CliError;

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

fn fmt_bounds(bounds: &Bounds) -> String {
    format!("{:.1},{:.1} to {:.1},{:.1}", bounds.south, bounds.west, bounds.north, bounds.east)
}

// =============================================================
// cell / bounds
// =============================================================

#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub point: LatLng,
    pub graticule: Graticule,
    pub centicle: Centicle,
    pub bounds: Bounds,
}

/// Graticule and centicle containing `point`.
#[must_use]
pub fn cell(point: LatLng) -> CellReport {
    let graticule = Graticule::containing(point);
    let centicle = cell_index_from_point(point);
    CellReport { point, graticule, centicle, bounds: cell_bounds(graticule, centicle) }
}

/// Centicle `index` of the graticule containing `point`.
#[must_use]
pub fn bounds(point: LatLng, index: Centicle) -> CellReport {
    let graticule = Graticule::containing(point);
    CellReport { point, graticule, centicle: index, bounds: cell_bounds(graticule, index) }
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graticule  {}", self.graticule)?;
        writeln!(f, "centicle   {}", self.centicle)?;
        write!(f, "bounds     {}", fmt_bounds(&self.bounds))
    }
}

// =============================================================
// grid
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub index: Centicle,
    pub active: bool,
}

/// The overlay as seen on a map: rows north to south, cells west to east.
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    pub graticule: Graticule,
    pub active: Vec<Centicle>,
    pub rows: Vec<Vec<GridCell>>,
}

/// Build the overlay around `point` on a headless surface and click each of
/// `active` once.
#[must_use]
pub fn grid(point: LatLng, active: &[Centicle]) -> GridReport {
    let mut overlay = GridOverlay::new(MemorySurface::new(), point);
    let origin = overlay.origin();

    for &index in active.iter().collect::<BTreeSet<_>>() {
        let target = cell_bounds(origin, index).center();
        match overlay.surface().click(target) {
            Some(event) => {
                overlay.handle_click(event);
            }
            None => tracing::warn!(%index, "no cell under {target}"),
        }
    }

    let mut cells: Vec<(Bounds, GridCell)> = Centicle::all()
        .filter_map(|index| {
            let state = overlay.cell(index);
            let rect = overlay.surface().rect(state.handle)?;
            Some((rect.bounds, GridCell { index, active: state.active }))
        })
        .collect();
    cells.sort_by(|(a, _), (b, _)| b.north.total_cmp(&a.north).then(a.west.total_cmp(&b.west)));

    let rows = cells.chunks(10).map(|row| row.iter().map(|(_, cell)| *cell).collect()).collect();
    GridReport { graticule: origin, active: overlay.list_active_indices(), rows }
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graticule {}", self.graticule)?;
        for row in &self.rows {
            for cell in row {
                if cell.active {
                    write!(f, "[{}]", cell.index)?;
                } else {
                    write!(f, " {} ", cell.index)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "active: {}", active_label(&self.active))
    }
}

// =============================================================
// geohash / watch
// =============================================================

#[derive(Debug, Clone, Serialize)]
pub struct GeohashReport {
    pub graticule: Graticule,
    pub point: LatLng,
    pub centicle: Centicle,
    pub url: String,
    pub geohash: Geohash,
}

/// The geohash for `date` in `graticule`.
///
/// # Errors
///
/// Fails if no agreed DJIA open covers the date.
pub fn geohash(date: Date, graticule: Graticule, opens: &DowOpens) -> Result<GeohashReport, CliError> {
    let hash = geohash::geohash(date, opens, graticule.is_west_of_30())?;
    Ok(GeohashReport {
        graticule,
        point: hash.point_in(graticule),
        centicle: hash.centicle(),
        url: hash.map_url(graticule),
        geohash: hash,
    })
}

impl fmt::Display for GeohashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "date       {}", format_date(self.geohash.date))?;
        writeln!(f, "djia       {} ({})", self.geohash.dow_open, format_date(self.geohash.dow_date))?;
        writeln!(f, "graticule  {}", self.graticule)?;
        writeln!(f, "centicle   {}", self.centicle)?;
        write!(f, "url        {}", self.url)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchReport {
    pub date: Date,
    pub expeditions: Vec<Expedition>,
}

/// Watched centicles that hold the geohash on `date`.
///
/// # Errors
///
/// Fails if a needed DJIA open is missing.
pub fn watch(date: Date, list: &WatchList, opens: &DowOpens) -> Result<WatchReport, CliError> {
    let expeditions = watch::expeditions(list, date, opens)?;
    Ok(WatchReport { date, expeditions })
}

impl fmt::Display for WatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expeditions.is_empty() {
            return write!(f, "no expeditions on {}", format_date(self.date));
        }
        for (i, exp) in self.expeditions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut channels = Vec::new();
            if exp.notify.email {
                channels.push("email");
            }
            if exp.notify.talkpage {
                channels.push("talkpage");
            }
            write!(f, "{}  centicle {}  {}", exp.title(), exp.centicle, exp.map_url())?;
            if !channels.is_empty() {
                write!(f, "  [{}]", channels.join(","))?;
            }
        }
        Ok(())
    }
}
