use centicle::GeohashError;
use centicle::geohash::parse_date;
use centicle::watch::parse_watchlist;

use super::*;

fn c(index: u8) -> Centicle {
    Centicle::new(index).unwrap()
}

fn opens() -> DowOpens {
    [("2024-04-29", "38282.16"), ("2024-04-30", "38337.40")]
        .into_iter()
        .map(|(d, v)| (parse_date(d).unwrap(), v.to_owned()))
        .collect()
}

fn row_indices(report: &GridReport, row: usize) -> Vec<u8> {
    report.rows[row].iter().map(|cell| cell.index.get()).collect()
}

// =============================================================
// cell / bounds
// =============================================================

#[test]
fn cell_reports_graticule_centicle_and_bounds() {
    let report = cell(LatLng::new(40.35, -73.72));
    assert_eq!(report.graticule.to_string(), "40,-73");
    assert_eq!(report.centicle, c(37));
    assert_eq!(report.to_string(), "graticule  40,-73\ncenticle   37\nbounds     40.3,-73.8 to 40.4,-73.7");
}

#[test]
fn cell_keeps_negative_zero_graticule() {
    let report = cell(LatLng::new(-0.25, 0.5));
    assert_eq!(report.graticule.to_string(), "-0,0");
    assert_eq!(report.centicle, c(25));
}

#[test]
fn bounds_uses_given_index() {
    let report = bounds(LatLng::new(40.35, -73.72), c(0));
    assert_eq!(report.centicle, c(0));
    assert!(report.to_string().ends_with("40.0,-73.1 to 40.1,-73.0"));
}

#[test]
fn cell_report_serializes_centicle_as_number() {
    let json = serde_json::to_value(cell(LatLng::new(40.35, -73.72))).unwrap();
    assert_eq!(json["centicle"], 37);
    assert_eq!(json["point"]["lat"], 40.35);
}

// =============================================================
// grid
// =============================================================

#[test]
fn grid_rows_run_north_to_south_and_west_to_east() {
    let report = grid(LatLng::new(40.5, -73.5), &[]);
    assert_eq!(report.rows.len(), 10);
    assert!(report.rows.iter().all(|row| row.len() == 10));
    assert_eq!(row_indices(&report, 0), vec![99, 98, 97, 96, 95, 94, 93, 92, 91, 90]);
    assert_eq!(row_indices(&report, 9), vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    assert!(report.active.is_empty());
}

#[test]
fn grid_orientation_flips_in_southern_and_eastern_hemispheres() {
    let report = grid(LatLng::new(-33.5, 151.2), &[]);
    assert_eq!(report.graticule.to_string(), "-33,151");
    assert_eq!(row_indices(&report, 0), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(row_indices(&report, 9), vec![90, 91, 92, 93, 94, 95, 96, 97, 98, 99]);
}

#[test]
fn grid_activates_each_index_once() {
    let report = grid(LatLng::new(40.5, -73.5), &[c(37), c(5), c(37)]);
    assert_eq!(report.active, vec![c(5), c(37)]);

    let active: Vec<u8> = report.rows.iter().flatten().filter(|cell| cell.active).map(|cell| cell.index.get()).collect();
    assert_eq!(active.len(), 2);

    let text = report.to_string();
    assert!(text.starts_with("graticule 40,-73\n 99  98 "));
    assert!(text.contains("[37]"));
    assert!(text.contains("[05]"));
    assert!(text.ends_with("active: 5 37"));
}

// =============================================================
// geohash / watch
// =============================================================

#[test]
fn geohash_west_of_30_uses_same_day_open() {
    let report = geohash(parse_date("2024-04-30").unwrap(), "47,-122".parse().unwrap(), &opens()).unwrap();
    assert_eq!(report.centicle, c(95));
    assert_eq!(report.url, "https://maps.google.com/?q=47.9023250203492802,-122.5518558190767081");
    assert!(report.to_string().contains("djia       38337.40 (2024-04-30)"));
}

#[test]
fn geohash_east_of_30_uses_previous_open() {
    let report = geohash(parse_date("2024-04-30").unwrap(), "52,13".parse().unwrap(), &opens()).unwrap();
    assert_eq!(report.centicle, c(19));
    assert_eq!(report.geohash.dow_open, "38282.16");
}

#[test]
fn geohash_without_open_is_an_error() {
    let err = geohash(parse_date("2024-06-30").unwrap(), "47,-122".parse().unwrap(), &opens()).unwrap_err();
    assert!(matches!(err, CliError::Geohash(GeohashError::NoDowOpen { .. })));
}

#[test]
fn watch_lists_matching_expeditions() {
    let list = parse_watchlist("| 47 || -122 || 95 || || Tuesday, Email\n| 52 || 13 || 19 20 || ||\n").unwrap();
    let report = watch(parse_date("2024-04-30").unwrap(), &list, &opens()).unwrap();
    assert_eq!(report.expeditions.len(), 2);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().any(|l| l.starts_with("2024-04-30 47 -122  centicle 95") && l.ends_with("[email]")));
    assert!(lines.iter().any(|l| l.starts_with("2024-04-30 52 13  centicle 19") && !l.contains('[')));
}

#[test]
fn watch_reports_quiet_day() {
    let list = parse_watchlist("| 47 || -122 || 95 || || Monday\n").unwrap();
    let report = watch(parse_date("2024-04-30").unwrap(), &list, &opens()).unwrap();
    assert!(report.expeditions.is_empty());
    assert_eq!(report.to_string(), "no expeditions on 2024-04-30");
}
