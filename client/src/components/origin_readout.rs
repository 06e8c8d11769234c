//! Latitude/longitude of the current graticule.

use leptos::prelude::*;

use crate::state::grid_view::GridViewState;

#[component]
pub fn OriginReadout() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridViewState>>();
    let lat = move || grid.with(GridViewState::lat_label);
    let lng = move || grid.with(GridViewState::lng_label);

    view! {
        <div class="centicles__origin">
            <span class="centicles__label">"Graticule"</span>
            <span id="lat">{lat}</span>
            ", "
            <span id="lng">{lng}</span>
        </div>
    }
}
