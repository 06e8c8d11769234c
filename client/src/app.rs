//! Root component and shared state wiring.

use leptos::prelude::*;

use crate::components::active_cells::ActiveCells;
use crate::components::map_host::MapHost;
use crate::components::origin_readout::OriginReadout;
use crate::state::grid_view::GridViewState;

/// The whole page: text outputs above the map.
#[component]
pub fn App() -> impl IntoView {
    provide_context(RwSignal::new(GridViewState::default()));

    view! {
        <main class="centicles">
            <header class="centicles__readout">
                <OriginReadout/>
                <ActiveCells/>
            </header>
            <MapHost/>
        </main>
    }
}
