//! Graticule and centicle model for the geohashing grid overlay.
//!
//! A graticule is a 1°×1° cell anchored at an integer-truncated coordinate.
//! It is split into 100 centicles of 0.1°×0.1°, indexed `0..=99` by their
//! latitude tenth (tens digit) and longitude tenth (ones digit).
//!
//! This crate is surface-agnostic: [`overlay::GridOverlay`] drives any
//! [`surface::MapSurface`] implementation. The browser canvas engine lives in
//! the `canvas` crate; [`surface::MemorySurface`] is the headless one.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coord`] | Points, bounds, graticules, centicles and the cell math |
//! | [`surface`] | Map surface capability trait and the headless surface |
//! | [`overlay`] | Grid overlay controller and click handling |
//! | [`query`] | Start point from a page query string |
//! | [`geohash`] | Daily geohash point from date and DJIA open |
//! | [`dow`] | DJIA open quorum across several sources |
//! | [`watch`] | Watch-list parsing and expedition matching |
//! | [`consts`] | Grid sizes and rectangle styles |
//! | [`error`] | Error types |

pub mod consts;
pub mod coord;
pub mod dow;
pub mod error;
pub mod geohash;
pub mod overlay;
pub mod query;
pub mod surface;
pub mod watch;

pub use coord::{Bounds, Centicle, Graticule, LatLng};
pub use error::{GeohashError, GridError, WatchError};
pub use overlay::{GridOverlay, OverlayUpdate};
pub use surface::{ClickEvent, ClickTarget, MapSurface, RectStyle};
