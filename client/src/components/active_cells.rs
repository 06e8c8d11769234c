//! Space-separated list of toggled centicles.

use leptos::prelude::*;

use crate::state::grid_view::GridViewState;

#[component]
pub fn ActiveCells() -> impl IntoView {
    let grid = expect_context::<RwSignal<GridViewState>>();
    let label = move || grid.with(GridViewState::active_label);

    view! {
        <div class="centicles__active">
            <span class="centicles__label">"Centicles"</span>
            <span id="active_cents">{label}</span>
        </div>
    }
}
