//! Coordinate math: points, bounds, graticules and centicles.
//!
//! Offsets inside a graticule always grow away from the equator and the prime
//! meridian. A graticule keeps the sign of the point it came from, so the
//! cells just south of the equator belong to graticule `-0`, not `0`, and
//! extend southwards.

#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_COUNT, CELLS_PER_SIDE, CENTER_OFFSET_DEG, GRAT_SIZE_DEG};
use crate::error::GridError;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Axis-aligned rectangle in degrees with `south <= north` and `west <= east`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Normalize two opposite corners into a rectangle.
    #[must_use]
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lng.min(b.lng),
            north: a.lat.max(b.lat),
            east: a.lng.max(b.lng),
        }
    }

    /// Whether `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south && point.lat <= self.north && point.lng >= self.west && point.lng <= self.east
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new((self.south + self.north) * 0.5, (self.west + self.east) * 0.5)
    }

    /// North-west corner (top-left on a north-up map).
    #[must_use]
    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north, self.west)
    }

    /// South-east corner (bottom-right on a north-up map).
    #[must_use]
    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south, self.east)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

/// Add `offset` to `x`, moving away from zero on `x`'s side of the axis.
///
/// `-0.0` counts as negative.
#[must_use]
pub fn signed_add(x: f64, offset: f64) -> f64 {
    if x.is_sign_negative() { x - offset } else { x + offset }
}

/// Apply [`signed_add`] to both components of `point`.
#[must_use]
pub fn signed_add_latlng(point: LatLng, lat_offset: f64, lng_offset: f64) -> LatLng {
    LatLng::new(signed_add(point.lat, lat_offset), signed_add(point.lng, lng_offset))
}

/// Square of edge `size` with one corner at `corner`, extending away from zero.
#[must_use]
pub fn square_bounds(corner: LatLng, size: f64) -> Bounds {
    Bounds::from_corners(corner, signed_add_latlng(corner, size, size))
}

/// A 1°×1° cell anchored at a whole-degree corner.
///
/// Ordering and equality are total and sign-aware: `-0` sorts before `0` and
/// the two are distinct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Graticule {
    lat: f64,
    lng: f64,
}

impl Graticule {
    /// The graticule containing `point`, found by truncating toward zero.
    #[must_use]
    pub fn containing(point: LatLng) -> Self {
        Self { lat: point.lat.trunc(), lng: point.lng.trunc() }
    }

    /// Latitude of the anchor corner, possibly `-0.0`.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude of the anchor corner, possibly `-0.0`.
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// The anchor corner as a point.
    #[must_use]
    pub fn corner(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Middle of the graticule, used to center the map.
    #[must_use]
    pub fn center(&self) -> LatLng {
        signed_add_latlng(self.corner(), CENTER_OFFSET_DEG, CENTER_OFFSET_DEG)
    }

    /// Full extent of the graticule.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        grat_bounds(*self)
    }

    /// Whether this graticule lies west of 30°W, where same-day DJIA opens apply.
    #[must_use]
    pub fn is_west_of_30(&self) -> bool {
        self.lng < -30.0
    }
}

impl PartialEq for Graticule {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Graticule {}

impl PartialOrd for Graticule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Graticule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat.total_cmp(&other.lat).then_with(|| self.lng.total_cmp(&other.lng))
    }
}

impl fmt::Display for Graticule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Graticule {
    type Err = GridError;

    /// Parse `lat,lng` in whole degrees; `-0` is kept distinct from `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidGraticule(s.to_owned());
        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat = parse_whole_degree(lat, 90.0).ok_or_else(invalid)?;
        let lng = parse_whole_degree(lng, 180.0).ok_or_else(invalid)?;
        Ok(Self { lat, lng })
    }
}

fn parse_whole_degree(raw: &str, limit: f64) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && value.abs() < limit => Some(value),
        _ => None,
    }
}

/// One of the 100 tenth-degree cells of a graticule.
///
/// The tens digit is the latitude tenth and the ones digit the longitude tenth.
/// Displays as two digits (`05`), the way geohashers write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Centicle(u8);

impl Centicle {
    /// Number of centicles in a graticule.
    pub const COUNT: usize = CELL_COUNT as usize;

    /// Validate an index.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] for values above 99.
    pub fn new(index: u8) -> Result<Self, GridError> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(GridError::IndexOutOfRange(u16::from(index)))
        }
    }

    /// Build from latitude and longitude tenths.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if either digit is above 9.
    pub fn from_digits(lat_digit: u8, lng_digit: u8) -> Result<Self, GridError> {
        if lat_digit >= CELLS_PER_SIDE || lng_digit >= CELLS_PER_SIDE {
            return Err(GridError::IndexOutOfRange(u16::from(lat_digit) * 10 + u16::from(lng_digit)));
        }
        Ok(Self(lat_digit * CELLS_PER_SIDE + lng_digit))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn lat_digit(self) -> u8 {
        self.0 / CELLS_PER_SIDE
    }

    #[must_use]
    pub fn lng_digit(self) -> u8 {
        self.0 % CELLS_PER_SIDE
    }

    /// All centicles in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self)
    }
}

impl TryFrom<u8> for Centicle {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Centicle> for u8 {
    fn from(value: Centicle) -> Self {
        value.0
    }
}

impl fmt::Display for Centicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Centicle {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| GridError::InvalidCenticle(trimmed.to_owned()))?;
        let index = u8::try_from(value).map_err(|_| GridError::IndexOutOfRange(value))?;
        Self::new(index)
    }
}

/// Edge at `n` tenths of a degree, correctly rounded.
fn tenth_edge(n: f64) -> f64 {
    n / f64::from(CELLS_PER_SIDE)
}

/// Whole tenths in `|x|`, with `tenth_edge(n) <= |x| < tenth_edge(n + 1)`.
///
/// `floor(|x| * 10)` can land one off next to an edge; the result is nudged
/// so it agrees with the edges [`cell_bounds`] draws.
fn whole_tenths(x: f64) -> f64 {
    let abs = x.abs();
    let n = (abs * f64::from(CELLS_PER_SIDE)).floor();
    if tenth_edge(n) > abs {
        n - 1.0
    } else if tenth_edge(n + 1.0) <= abs {
        n + 1.0
    } else {
        n
    }
}

/// Tenths digit of `|x|`, consistent with `floor`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tenths(x: f64) -> u8 {
    (whole_tenths(x) % f64::from(CELLS_PER_SIDE)) as u8
}

/// Centicle containing `point` within its own graticule.
///
/// Non-finite components map to digit 0.
#[must_use]
pub fn cell_index_from_point(point: LatLng) -> Centicle {
    Centicle(tenths(point.lat) * CELLS_PER_SIDE + tenths(point.lng))
}

/// Span `(min, max)` of tenth `digit` inside the whole degree `whole`.
fn cell_span(whole: f64, digit: u8) -> (f64, f64) {
    let near = whole.abs() * f64::from(CELLS_PER_SIDE) + f64::from(digit);
    let (lo, hi) = (tenth_edge(near), tenth_edge(near + 1.0));
    if whole.is_sign_negative() { (-hi, -lo) } else { (lo, hi) }
}

/// Rectangle of centicle `index` inside graticule `origin`.
///
/// Edges are computed from whole tenths so they sit on the same decimal
/// boundaries [`cell_index_from_point`] uses.
#[must_use]
pub fn cell_bounds(origin: Graticule, index: Centicle) -> Bounds {
    let (south, north) = cell_span(origin.lat(), index.lat_digit());
    let (west, east) = cell_span(origin.lng(), index.lng_digit());
    Bounds { south, west, north, east }
}

/// Rectangle of the whole graticule `origin`.
#[must_use]
pub fn grat_bounds(origin: Graticule) -> Bounds {
    square_bounds(origin.corner(), GRAT_SIZE_DEG)
}
