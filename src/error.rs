use std::path::PathBuf;

use centicle::{GeohashError, WatchError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: GeohashError,
    },
    #[error("{}: {source}", path.display())]
    Watchlist {
        path: PathBuf,
        #[source]
        source: WatchError,
    },
    #[error("no DJIA sources; pass --dow-source or set CENTICLES_DOW_SOURCES")]
    NoSources,
    #[error(transparent)]
    Geohash(#[from] GeohashError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
