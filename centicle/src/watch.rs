//! Watch lists: which centicles a geohasher would travel to, on which days.
//!
//! A watch list is a wiki table with one row per graticule:
//!
//! ```text
//! | 47 || -122 || 50 51 52 60 61 62 || message || Email, Saturday
//! ```
//!
//! Columns are latitude, longitude, space-separated centicles, a free-form
//! message (ignored here) and comma-separated settings. Settings name
//! weekdays and notification channels (`Email`, `Talkpage`); a row with no
//! weekday applies to all seven. Rows for the same graticule merge.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::collections::BTreeMap;

use serde::Serialize;
use time::{Date, Weekday};

use crate::coord::{Centicle, Graticule};
use crate::error::{GeohashError, GridError, WatchError};
use crate::geohash::{DowOpens, Geohash, format_date, geohash};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// How a match should be announced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Notify {
    /// Listed on the watch-list page itself.
    pub config_page: bool,
    pub email: bool,
    pub talkpage: bool,
}

impl Notify {
    fn merge(&mut self, other: Self) {
        self.config_page |= other.config_page;
        self.email |= other.email;
        self.talkpage |= other.talkpage;
    }
}

/// Watched centicles for one weekday, by graticule.
pub type DayPlan = BTreeMap<Graticule, BTreeMap<Centicle, Notify>>;

/// Parsed watch list, by weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchList {
    days: BTreeMap<u8, DayPlan>,
}

impl WatchList {
    /// Plan for `weekday`, if any row covers it.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.get(&weekday.number_days_from_monday())
    }

    /// Number of weekdays with at least one watched centicle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn add(&mut self, weekday: Weekday, graticule: Graticule, centicle: Centicle, notify: Notify) {
        self.days
            .entry(weekday.number_days_from_monday())
            .or_default()
            .entry(graticule)
            .or_default()
            .entry(centicle)
            .or_default()
            .merge(notify);
    }
}

/// Parse a wiki watch-list table.
///
/// Lines with fewer than five `|` characters (headers, table markup, prose)
/// are skipped.
///
/// # Errors
///
/// Returns [`WatchError::InvalidRow`] for a table row whose graticule or
/// centicles do not parse.
pub fn parse_watchlist(text: &str) -> Result<WatchList, WatchError> {
    let mut list = WatchList::default();
    for (idx, line) in text.lines().enumerate() {
        if line.matches('|').count() < 5 {
            continue;
        }
        let invalid = |source: GridError| WatchError::InvalidRow { line: idx + 1, source };
        let parts: Vec<&str> = line.split('|').collect();
        let column = |i: usize| parts.get(i).map_or("", |s| s.trim());

        let graticule = format!("{},{}", column(1), column(3))
            .parse::<Graticule>()
            .map_err(invalid)?;
        let centicles = column(5)
            .split_whitespace()
            .map(str::parse::<Centicle>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let (weekdays, notify) = parse_settings(column(9), idx + 1);

        for weekday in weekdays {
            for &centicle in &centicles {
                list.add(weekday, graticule, centicle, notify);
            }
        }
    }
    Ok(list)
}

fn parse_settings(raw: &str, line: usize) -> (Vec<Weekday>, Notify) {
    let mut weekdays = Vec::new();
    let mut notify = Notify { config_page: true, ..Notify::default() };
    for setting in raw.split(',').map(|s| s.trim().to_lowercase()) {
        match setting.as_str() {
            "" => {}
            "email" => notify.email = true,
            "talkpage" => notify.talkpage = true,
            other => match parse_weekday(other) {
                Some(day) => weekdays.push(day),
                None => log::warn!("line {line}: ignoring unknown setting `{other}`"),
            },
        }
    }
    if weekdays.is_empty() {
        weekdays.extend(ALL_WEEKDAYS);
    }
    (weekdays, notify)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    ALL_WEEKDAYS
        .into_iter()
        .find(|day| day.to_string().eq_ignore_ascii_case(name))
}

/// A watched centicle that holds the day's geohash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expedition {
    pub graticule: Graticule,
    pub centicle: Centicle,
    pub notify: Notify,
    pub geohash: Geohash,
}

impl Expedition {
    /// Page title in geohashing wiki style, e.g. `2020-01-01 1 2`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {} {}", format_date(self.geohash.date), self.graticule.lat(), self.graticule.lng())
    }

    #[must_use]
    pub fn map_url(&self) -> String {
        self.geohash.map_url(self.graticule)
    }
}

/// Watched graticules whose geohash for `date` lands in a watched centicle.
///
/// # Errors
///
/// Propagates [`GeohashError::NoDowOpen`] when a needed opening value is
/// missing.
pub fn expeditions(list: &WatchList, date: Date, opens: &DowOpens) -> Result<Vec<Expedition>, GeohashError> {
    let Some(plan) = list.day(date.weekday()) else {
        return Ok(Vec::new());
    };

    let mut hashes: [Option<Geohash>; 2] = [None, None];
    let mut found = Vec::new();
    for (graticule, watched) in plan {
        let west = graticule.is_west_of_30();
        let slot = usize::from(west);
        if hashes[slot].is_none() {
            hashes[slot] = Some(geohash(date, opens, west)?);
        }
        let Some(hash) = hashes[slot].as_ref() else {
            continue;
        };
        let centicle = hash.centicle();
        if let Some(&notify) = watched.get(&centicle) {
            log::info!("{graticule}: geohash in watched centicle {centicle}");
            found.push(Expedition { graticule: *graticule, centicle, notify, geohash: hash.clone() });
        }
    }
    Ok(found)
}
