//! File loading for DJIA sources and watch lists.

use std::path::{Path, PathBuf};

use centicle::dow::{self, MIN_REPORTS};
use centicle::geohash::DowOpens;
use centicle::watch::{self, WatchList};

use crate::error::CliError;

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

/// Read every source file and reconcile them into one opening value per date.
///
/// # Errors
///
/// Fails if no paths are given, a file cannot be read, or a line is malformed.
pub fn load_opens(paths: &[PathBuf]) -> Result<DowOpens, CliError> {
    if paths.is_empty() {
        return Err(CliError::NoSources);
    }
    if paths.len() < MIN_REPORTS {
        tracing::warn!(sources = paths.len(), needed = MIN_REPORTS, "too few DJIA sources for a quorum");
    }

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = read_text(path)?;
        let readings = dow::parse_source(&text).map_err(|source| CliError::Source { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), readings = readings.len(), "loaded DJIA source");
        sources.push(readings);
    }

    let opens = dow::quorum(&sources);
    tracing::info!(sources = sources.len(), dates = opens.len(), "DJIA quorum reached");
    Ok(opens)
}

/// Read and parse a wiki watch-list table.
///
/// # Errors
///
/// Fails if the file cannot be read or a table row is malformed.
pub fn load_watchlist(path: &Path) -> Result<WatchList, CliError> {
    let text = read_text(path)?;
    let list = watch::parse_watchlist(&text).map_err(|source| CliError::Watchlist { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), entries = list.len(), "loaded watch list");
    Ok(list)
}
