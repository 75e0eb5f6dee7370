//! Grid of result cards, in the order the catalog returned them.

#[cfg(test)]
#[path = "results_grid_test.rs"]
mod results_grid_test;

use leptos::prelude::*;

use crate::components::recipe_card::RecipeCard;
use crate::state::recipes::RecipeState;

#[component]
pub fn ResultsGrid(on_open: Callback<String>) -> impl IntoView {
    let recipes = expect_context::<RwSignal<RecipeState>>();

    view! {
        <div id="results-grid" class="results-grid">
            {move || {
                recipes
                    .with(|state| state.results.clone())
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard recipe=recipe on_open=on_open/> })
                    .collect_view()
            }}
        </div>
    }
}
