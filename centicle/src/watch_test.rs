use super::*;
use crate::geohash::parse_date;

fn g(raw: &str) -> Graticule {
    raw.parse().unwrap()
}

fn c(raw: &str) -> Centicle {
    raw.parse().unwrap()
}

const CONFIG_ONLY: Notify = Notify { config_page: true, email: false, talkpage: false };
const WITH_EMAIL: Notify = Notify { config_page: true, email: true, talkpage: false };
const WITH_TALKPAGE: Notify = Notify { config_page: true, email: false, talkpage: true };
const WITH_BOTH: Notify = Notify { config_page: true, email: true, talkpage: true };

fn opens() -> DowOpens {
    [("2024-04-29", "38282.16"), ("2024-04-30", "38337.40")]
        .into_iter()
        .map(|(d, v)| (parse_date(d).unwrap(), v.to_owned()))
        .collect()
}

// =============================================================
// parse_watchlist
// =============================================================

#[test]
fn parses_wiki_table_with_header_rows() {
    let text = r#"
    {| border="1" cellpadding="5" cellspacing="0"
    |-
    !Latitude!!Longitude!!Centicule!!Message!!Settings
    |-
    | 47 || -122 || 50 51 52 60 61 62 70 71 72 || || Email, Saturday
    |-
    | 47 || -122 || 61 || ||
    |}
    "#;
    let list = parse_watchlist(text).unwrap();
    assert_eq!(list.len(), 7);

    for day in [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Sunday,
    ] {
        let plan = list.day(day).unwrap();
        assert_eq!(plan.len(), 1);
        let watched = &plan[&g("47,-122")];
        assert_eq!(watched.len(), 1);
        assert_eq!(watched[&c("61")], CONFIG_ONLY);
    }

    let saturday = &list.day(Weekday::Saturday).unwrap()[&g("47,-122")];
    assert_eq!(saturday.len(), 9);
    assert_eq!(saturday[&c("50")], WITH_EMAIL);
    assert_eq!(saturday[&c("61")], WITH_EMAIL);
}

#[test]
fn overlapping_rows_merge_flags() {
    let text = "
    | 1 || 2 || 03 04 05 06          || || Monday
    | 1 || 2 ||    04 05 06 07       || || Monday, Email
    | 1 || 2 ||       05 06 07 08    || || Monday, Tuesday
    | 1 || 2 ||          06 07 08 09 || || Monday, Tuesday, Talkpage
    ";
    let list = parse_watchlist(text).unwrap();
    assert_eq!(list.len(), 2);

    let monday = list.day(Weekday::Monday).unwrap();
    assert_eq!(monday.len(), 1);
    let monday = &monday[&g("1,2")];
    assert_eq!(monday.len(), 7);
    assert_eq!(monday[&c("03")], CONFIG_ONLY);
    assert_eq!(monday[&c("04")], WITH_EMAIL);
    assert_eq!(monday[&c("05")], WITH_EMAIL);
    assert_eq!(monday[&c("06")], WITH_BOTH);
    assert_eq!(monday[&c("07")], WITH_BOTH);
    assert_eq!(monday[&c("08")], WITH_TALKPAGE);
    assert_eq!(monday[&c("09")], WITH_TALKPAGE);

    let tuesday = &list.day(Weekday::Tuesday).unwrap()[&g("1,2")];
    assert_eq!(tuesday.len(), 5);
    assert_eq!(tuesday[&c("05")], CONFIG_ONLY);
    assert_eq!(tuesday[&c("06")], WITH_TALKPAGE);
    assert_eq!(tuesday[&c("09")], WITH_TALKPAGE);
    assert!(list.day(Weekday::Wednesday).is_none());
}

#[test]
fn negative_zero_graticule_is_its_own_row() {
    let list = parse_watchlist("| -0 || 5 || 11 || ||\n| 0 || 5 || 22 || ||").unwrap();
    let plan = list.day(Weekday::Friday).unwrap();
    assert_eq!(plan.len(), 2);
    assert!(plan[&g("-0,5")].contains_key(&c("11")));
    assert!(plan[&g("0,5")].contains_key(&c("22")));
}

#[test]
fn unknown_settings_are_ignored() {
    let list = parse_watchlist("| 1 || 2 || 33 || hi || Pigeon, Sunday").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.day(Weekday::Sunday).unwrap()[&g("1,2")][&c("33")], CONFIG_ONLY);
}

#[test]
fn prose_only_text_is_empty() {
    let list = parse_watchlist("Nothing to see | here").unwrap();
    assert!(list.is_empty());
}

#[test]
fn bad_graticule_reports_line() {
    let err = parse_watchlist("\n| north || 2 || 33 || ||").unwrap_err();
    assert!(matches!(err, WatchError::InvalidRow { line: 2, source: GridError::InvalidGraticule(_) }));
}

#[test]
fn bad_centicle_reports_line() {
    let err = parse_watchlist("| 1 || 2 || 33 123 || ||").unwrap_err();
    assert!(matches!(err, WatchError::InvalidRow { line: 1, source: GridError::IndexOutOfRange(123) }));
}

// =============================================================
// expeditions
// =============================================================

#[test]
fn matches_west_and_east_graticules() {
    let text = "
    | 47 || -122 || 95 || || Email
    | 52 || 13 || 19 || ||
    | 40 || -74 || 00 || ||
    ";
    let list = parse_watchlist(text).unwrap();
    let date = parse_date("2024-04-30").unwrap();
    let found = expeditions(&list, date, &opens()).unwrap();

    assert_eq!(found.len(), 2);
    let seattle = found.iter().find(|e| e.graticule == g("47,-122")).unwrap();
    assert_eq!(seattle.centicle, c("95"));
    assert_eq!(seattle.notify, WITH_EMAIL);
    assert_eq!(seattle.title(), "2024-04-30 47 -122");
    assert_eq!(seattle.map_url(), "https://maps.google.com/?q=47.9023250203492802,-122.5518558190767081");

    let berlin = found.iter().find(|e| e.graticule == g("52,13")).unwrap();
    assert_eq!(berlin.centicle, c("19"));
    assert_eq!(berlin.geohash.dow_open, "38282.16");
}

#[test]
fn other_weekday_has_no_expeditions() {
    let list = parse_watchlist("| 47 || -122 || 95 || || Monday").unwrap();
    let date = parse_date("2024-04-30").unwrap();
    assert!(expeditions(&list, date, &opens()).unwrap().is_empty());
}

#[test]
fn missing_open_propagates() {
    let list = parse_watchlist("| 47 || -122 || 95 || ||").unwrap();
    let date = parse_date("2024-03-01").unwrap();
    assert!(matches!(expeditions(&list, date, &opens()), Err(GeohashError::NoDowOpen { .. })));
}
