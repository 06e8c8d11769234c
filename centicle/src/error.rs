//! Error types for the grid model, geohash computation and watch lists.

use time::Date;

/// Error returned by grid index and graticule parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A centicle index above 99.
    #[error("centicle index {0} is out of range 0..=99")]
    IndexOutOfRange(u16),
    /// A centicle label that is not a number.
    #[error("invalid centicle `{0}`")]
    InvalidCenticle(String),
    /// A graticule label that is not `lat,lng` with integral degrees in range.
    #[error("invalid graticule `{0}`; expected `lat,lng` in whole degrees")]
    InvalidGraticule(String),
}

/// Error returned by geohash and DJIA source handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeohashError {
    /// No DJIA opening value is known close enough before `date`.
    #[error("no DJIA opening value on or before {date}")]
    NoDowOpen { date: Date },
    /// A date string that is not `YYYY-MM-DD`.
    #[error("invalid date `{0}`; expected YYYY-MM-DD")]
    InvalidDate(String),
    /// A DJIA source line that is not `YYYY-MM-DD <open>`.
    #[error("line {line}: expected `YYYY-MM-DD <open>`")]
    InvalidSourceLine { line: usize },
    /// Date arithmetic left the supported calendar range.
    #[error("date {0} is out of range")]
    DateOutOfRange(Date),
}

/// Error returned by [`crate::watch::parse_watchlist`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// A table row whose graticule or centicle columns do not parse.
    #[error("line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: GridError,
    },
}
