//! Start point from the page URL.

use centicle::LatLng;
use centicle::query::parse_start;

/// `lat`/`lng` from `window.location.search`, defaulting missing values.
pub fn start_point() -> LatLng {
    let search = match web_sys::window().map(|w| w.location().search()) {
        Some(Ok(search)) => search,
        Some(Err(e)) => {
            log::warn!("cannot read location.search: {e:?}");
            String::new()
        }
        None => String::new(),
    };
    let start = parse_start(&search);
    log::debug!("starting at {start}");
    start
}
