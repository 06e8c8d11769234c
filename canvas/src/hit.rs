#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use centicle::{ClickEvent, ClickTarget};

use crate::camera::{Camera, Point};
use crate::doc::{RectId, RectStore};

/// Resolve a click at `screen_pt`: the topmost click-subscribed rectangle
/// containing it, else the bare map when `map_clickable` is set.
///
/// Returns `None` when nothing under the point reports clicks.
#[must_use]
pub fn hit_test(screen_pt: Point, doc: &RectStore, camera: &Camera, map_clickable: bool) -> Option<ClickEvent<RectId>> {
    let point = camera.screen_to_latlng(screen_pt);
    let target = doc
        .iter()
        .rev()
        .find(|(_, r)| r.clickable && r.bounds.contains(point))
        .map(|(id, _)| ClickTarget::Rect(id))
        .or(map_clickable.then_some(ClickTarget::Map))?;
    Some(ClickEvent { target, point })
}
