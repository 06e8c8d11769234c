//! Daily geohash: a pseudo-random point per graticule derived from the date
//! and a Dow Jones Industrial Average opening value.
//!
//! The md5 digest of `"YYYY-MM-DD-<djia open>"` is split into two 64-bit
//! halves. Each half, read as a binary fraction, is the offset of the point
//! from the graticule corner. Every graticule shares the same fractions, so
//! the day's centicle is the same everywhere on a given side of 30°W.
//!
//! East of 30°W the previous day's opening is used (the 30W rule), since the
//! local day starts before the New York market opens. The rule applies from
//! [`W30_RULE_START`] onward.

#[cfg(test)]
#[path = "geohash_test.rs"]
mod geohash_test;

use std::collections::BTreeMap;

use md5::{Digest, Md5};
use serde::Serialize;
use time::macros::{date, format_description};
use time::{Date, Duration};

use crate::coord::{Centicle, Graticule, LatLng, cell_index_from_point, signed_add_latlng};
use crate::error::GeohashError;

/// DJIA opening values by trading date, kept as published (`"38337.40"`).
pub type DowOpens = BTreeMap<Date, String>;

/// First date on which the 30W rule applies.
pub const W30_RULE_START: Date = date!(2008 - 05 - 27);

/// How far back to look for an opening value (weekends and holidays).
pub const DOW_LOOKBACK_DAYS: i64 = 7;

/// Geohash for one date and one side of 30°W.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geohash {
    /// Date the geohash is for.
    pub date: Date,
    /// Trading date whose opening value was hashed.
    pub dow_date: Date,
    /// The opening value, verbatim.
    pub dow_open: String,
    /// Latitude offset from the graticule corner, in `[0, 1)`.
    pub lat_fraction: f64,
    /// Longitude offset from the graticule corner, in `[0, 1)`.
    pub lng_fraction: f64,
}

impl Geohash {
    /// Centicle the point falls in, from the first decimal of each fraction.
    #[must_use]
    pub fn centicle(&self) -> Centicle {
        cell_index_from_point(LatLng::new(self.lat_fraction, self.lng_fraction))
    }

    /// Absolute point inside `graticule`.
    #[must_use]
    pub fn point_in(&self, graticule: Graticule) -> LatLng {
        signed_add_latlng(graticule.corner(), self.lat_fraction, self.lng_fraction)
    }

    /// Decimal digits of the latitude fraction, without the leading `0.`.
    #[must_use]
    pub fn lat_digits(&self) -> String {
        fraction_digits(self.lat_fraction)
    }

    /// Decimal digits of the longitude fraction, without the leading `0.`.
    #[must_use]
    pub fn lng_digits(&self) -> String {
        fraction_digits(self.lng_fraction)
    }

    /// Google Maps link to the point in `graticule`.
    ///
    /// The graticule label and the fraction digits are concatenated as text so
    /// `-0` graticules keep their sign.
    #[must_use]
    pub fn map_url(&self, graticule: Graticule) -> String {
        format!(
            "https://maps.google.com/?q={}.{},{}.{}",
            graticule.lat(),
            self.lat_digits(),
            graticule.lng(),
            self.lng_digits()
        )
    }
}

/// Compute the geohash for `date`.
///
/// `west_of_30` selects same-day opening values; otherwise the 30W rule
/// applies for dates on or after [`W30_RULE_START`].
///
/// # Errors
///
/// Returns [`GeohashError::NoDowOpen`] if `opens` has no value within
/// [`DOW_LOOKBACK_DAYS`] before the relevant date.
pub fn geohash(date: Date, opens: &DowOpens, west_of_30: bool) -> Result<Geohash, GeohashError> {
    let anchor = if !west_of_30 && date >= W30_RULE_START {
        date.previous_day().ok_or(GeohashError::DateOutOfRange(date))?
    } else {
        date
    };
    let (dow_date, dow_open) = dow_open_on_or_before(opens, anchor)?;

    let input = format!("{}-{}", format_date(date), dow_open);
    let digest = Md5::digest(input.as_bytes());
    let (high, low) = digest.split_at(8);

    Ok(Geohash {
        date,
        dow_date,
        dow_open: dow_open.to_owned(),
        lat_fraction: fraction(high),
        lng_fraction: fraction(low),
    })
}

/// Most recent opening value on or before `anchor`, within the lookback window.
///
/// # Errors
///
/// Returns [`GeohashError::NoDowOpen`] when nothing qualifies.
pub fn dow_open_on_or_before(opens: &DowOpens, anchor: Date) -> Result<(Date, &str), GeohashError> {
    opens
        .range(..=anchor)
        .next_back()
        .filter(|(day, _)| anchor - **day <= Duration::days(DOW_LOOKBACK_DAYS))
        .map(|(day, open)| (*day, open.as_str()))
        .ok_or(GeohashError::NoDowOpen { date: anchor })
}

/// Parse `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidDate`] for anything else.
pub fn parse_date(raw: &str) -> Result<Date, GeohashError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| GeohashError::InvalidDate(raw.trim().to_owned()))
}

/// Format as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Read 8 big-endian bytes as a binary fraction in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
fn fraction(bytes: &[u8]) -> f64 {
    let mut buf = [0_u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf) as f64 / 2_f64.powi(64)
}

fn fraction_digits(value: f64) -> String {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, digits)) => digits.to_owned(),
        None => "0".to_owned(),
    }
}
