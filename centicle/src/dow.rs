//! DJIA opening values gathered from several sources and reconciled by quorum.
//!
//! Scraped sources disagree now and then. A date's opening value is accepted
//! only when at least two sources report it and a strict majority of the
//! reports agree.

#[cfg(test)]
#[path = "dow_test.rs"]
mod dow_test;

use std::collections::BTreeMap;

use time::Date;

use crate::error::GeohashError;
use crate::geohash::{DowOpens, parse_date};

/// Minimum number of reports for a date before a value can be accepted.
pub const MIN_REPORTS: usize = 2;

/// One source's report of an opening value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DowReading {
    pub date: Date,
    pub open: String,
}

/// Parse a source file of `YYYY-MM-DD <open>` lines.
///
/// Blank lines and lines starting with `#` are skipped. Thousands separators
/// in the value are dropped (`38,337.40` → `38337.40`).
///
/// # Errors
///
/// Returns [`GeohashError::InvalidSourceLine`] or [`GeohashError::InvalidDate`]
/// for malformed lines.
pub fn parse_source(text: &str) -> Result<Vec<DowReading>, GeohashError> {
    let mut readings = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(date), Some(open), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(GeohashError::InvalidSourceLine { line: idx + 1 });
        };
        let open = open.replace(',', "");
        if open.parse::<f64>().is_err() {
            return Err(GeohashError::InvalidSourceLine { line: idx + 1 });
        }
        readings.push(DowReading { date: parse_date(date)?, open });
    }
    Ok(readings)
}

/// Reconcile readings from several sources into one value per date.
///
/// Dates with fewer than [`MIN_REPORTS`] reports, or where no value has a
/// strict majority, are left out.
#[must_use]
pub fn quorum(sources: &[Vec<DowReading>]) -> DowOpens {
    let mut by_date: BTreeMap<Date, Vec<&str>> = BTreeMap::new();
    for reading in sources.iter().flatten() {
        by_date.entry(reading.date).or_default().push(reading.open.as_str());
    }

    let mut opens = DowOpens::new();
    for (date, values) in by_date {
        if values.len() < MIN_REPORTS {
            log::debug!("{date}: only {} report(s); skipping", values.len());
            continue;
        }
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in &values {
            *counts.entry(*value).or_default() += 1;
        }
        match counts.into_iter().find(|(_, count)| count * 2 > values.len()) {
            Some((value, _)) => {
                opens.insert(date, value.to_owned());
            }
            None => log::warn!("{date}: sources disagree on the DJIA open ({})", values.join(", ")),
        }
    }
    opens
}
