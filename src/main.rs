use std::fmt::Display;
use std::path::PathBuf;

use centicle::geohash::parse_date;
use centicle::{Centicle, Graticule, LatLng};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;

mod error;
mod report;
mod sources;

use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "centicles", about = "Geohashing graticule and centicle tools")]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Graticule and centicle of a point.
    Cell(PointArgs),
    /// Bounds of one centicle in the graticule of a point.
    Bounds {
        #[command(flatten)]
        point: PointArgs,
        index: Centicle,
    },
    /// Text rendering of the 10x10 overlay around a point.
    Grid {
        #[command(flatten)]
        point: PointArgs,
        /// Centicles to switch on, comma separated.
        #[arg(long, value_delimiter = ',')]
        active: Vec<Centicle>,
    },
    /// The geohash for a date and graticule.
    Geohash {
        #[command(flatten)]
        date: DateArgs,
        #[arg(long, allow_hyphen_values = true)]
        graticule: Graticule,
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Watched centicles that hold the day's geohash.
    Watch {
        #[command(flatten)]
        date: DateArgs,
        #[arg(long, env = "CENTICLES_WATCHLIST")]
        watchlist: PathBuf,
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args, Debug)]
struct PointArgs {
    #[arg(allow_negative_numbers = true)]
    lat: f64,
    #[arg(allow_negative_numbers = true)]
    lng: f64,
}

impl PointArgs {
    fn point(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[derive(Args, Debug)]
struct DateArgs {
    /// YYYY-MM-DD; defaults to today (UTC).
    #[arg(long, value_parser = parse_date)]
    date: Option<Date>,
}

impl DateArgs {
    fn date(&self) -> Date {
        self.date.unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// DJIA source files of `YYYY-MM-DD <open>` lines; at least two agree on a value.
    #[arg(long = "dow-source", env = "CENTICLES_DOW_SOURCES", value_delimiter = ',')]
    dow_sources: Vec<PathBuf>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    match cli.command {
        Command::Cell(point) => emit(&report::cell(point.point()), json),
        Command::Bounds { point, index } => emit(&report::bounds(point.point(), index), json),
        Command::Grid { point, active } => emit(&report::grid(point.point(), &active), json),
        Command::Geohash { date, graticule, sources } => run_geohash(date.date(), graticule, &sources, json),
        Command::Watch { date, watchlist, sources } => run_watch(date.date(), &watchlist, &sources, json),
    }
}

fn run_geohash(date: Date, graticule: Graticule, sources: &SourceArgs, json: bool) -> Result<(), CliError> {
    let opens = sources::load_opens(&sources.dow_sources)?;
    let report = report::geohash(date, graticule, &opens)?;
    tracing::info!(%graticule, centicle = %report.centicle, "geohash computed");
    emit(&report, json)
}

fn run_watch(date: Date, watchlist: &std::path::Path, sources: &SourceArgs, json: bool) -> Result<(), CliError> {
    let list = sources::load_watchlist(watchlist)?;
    let opens = sources::load_opens(&sources.dow_sources)?;
    let report = report::watch(date, &list, &opens)?;
    tracing::info!(expeditions = report.expeditions.len(), "watch list checked");
    emit(&report, json)
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<(), CliError> {
    if json {
        let rendered = serde_json::to_string_pretty(report)?;
        println!("{rendered}");
    } else {
        println!("{report}");
    }
    Ok(())
}
