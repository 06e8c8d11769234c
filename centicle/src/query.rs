//! Start point from a page query string such as `?lat=40.7&lng=-73.9`.
//!
//! Missing or non-numeric values fall back to `0.0` instead of propagating
//! NaN into the grid.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::coord::LatLng;

/// Latitude and longitude used when the query string omits them.
pub const DEFAULT_START: LatLng = LatLng { lat: 0.0, lng: 0.0 };

/// Decode the `lat`/`lng` pair from `search` (with or without the leading `?`).
///
/// The first occurrence of each key wins.
#[must_use]
pub fn parse_start(search: &str) -> LatLng {
    let query = search.strip_prefix('?').unwrap_or(search);
    LatLng::new(
        coordinate(query, "lat", -90.0..=90.0).unwrap_or(DEFAULT_START.lat),
        coordinate(query, "lng", -180.0..=180.0).unwrap_or(DEFAULT_START.lng),
    )
}

fn coordinate(query: &str, key: &str, range: std::ops::RangeInclusive<f64>) -> Option<f64> {
    let Some(raw) = first_value(query, key) else {
        log::debug!("query has no `{key}`; using default");
        return None;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && range.contains(&value) => Some(value),
        Ok(value) => {
            log::warn!("query `{key}` value {value} is out of range; using default");
            None
        }
        Err(_) => {
            log::warn!("query `{key}` value `{raw}` is not a number; using default");
            None
        }
    }
}

/// First value for `key` in a form-urlencoded `query`.
#[must_use]
pub fn first_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
