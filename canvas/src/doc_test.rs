#![allow(clippy::float_cmp)]

use centicle::consts::{CELL_STYLE, GRAT_STYLE};
use centicle::{Bounds, LatLng};

use super::*;

fn unit(lat: f64, lng: f64) -> Bounds {
    Bounds::from_corners(LatLng::new(lat, lng), LatLng::new(lat + 1.0, lng + 1.0))
}

// =============================================================
// RectStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = RectStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn insert_copies_style_and_starts_unclickable() {
    let mut store = RectStore::new();
    let id = store.insert(unit(40.0, -74.0), &CELL_STYLE);
    let rect = store.get(id).unwrap();
    assert_eq!(rect.bounds, unit(40.0, -74.0));
    assert_eq!(rect.style, CELL_STYLE);
    assert_eq!(rect.fill_opacity, CELL_STYLE.fill_opacity);
    assert!(!rect.clickable);
}

#[test]
fn ids_follow_creation_order() {
    let mut store = RectStore::new();
    let a = store.insert(unit(0.0, 0.0), &GRAT_STYLE);
    let b = store.insert(unit(1.0, 1.0), &CELL_STYLE);
    assert!(a < b);
    let order: Vec<RectId> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![a, b]);
    let top = store.iter().next_back().map(|(id, _)| id);
    assert_eq!(top, Some(b));
}

#[test]
fn get_mut_updates_in_place() {
    let mut store = RectStore::new();
    let id = store.insert(unit(0.0, 0.0), &CELL_STYLE);
    store.get_mut(id).unwrap().fill_opacity = 0.4;
    assert_eq!(store.get(id).unwrap().fill_opacity, 0.4);
}

#[test]
fn unknown_id_is_none() {
    let mut other = RectStore::new();
    let foreign = other.insert(unit(0.0, 0.0), &CELL_STYLE);
    let mut store = RectStore::new();
    assert!(store.get(foreign).is_none());
    assert!(store.get_mut(foreign).is_none());
}
