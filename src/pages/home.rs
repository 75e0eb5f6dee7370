//! Recipe search page: search bar, status region, result grid, detail overlay.

use leptos::prelude::*;

use crate::components::recipe_modal::RecipeModal;
use crate::components::results_grid::ResultsGrid;
use crate::components::search_bar::SearchBar;
use crate::components::status_message::StatusMessage;
use crate::config::CatalogConfig;
use crate::net::api::MealDbCatalog;
use crate::net::dispatch;
use crate::state::recipes::RecipeState;
use crate::util::scroll_lock;

/// Run a dispatcher future in the browser. Events never fire during SSR, so
/// the server build just drops it.
fn spawn_dispatch(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let recipes = expect_context::<RwSignal<RecipeState>>();
    let catalog = MealDbCatalog::new(expect_context::<CatalogConfig>());

    let on_search = Callback::new({
        let catalog = catalog.clone();
        move |raw_term: String| {
            let catalog = catalog.clone();
            spawn_dispatch(async move {
                dispatch::search_by_name(&recipes, &catalog, &raw_term).await;
            });
        }
    });

    let on_random = Callback::new({
        let catalog = catalog.clone();
        move |()| {
            let catalog = catalog.clone();
            spawn_dispatch(async move {
                dispatch::fetch_random(&recipes, &catalog).await;
            });
        }
    });

    let on_open = Callback::new(move |id: String| {
        let catalog = catalog.clone();
        spawn_dispatch(async move {
            dispatch::fetch_detail_by_id(&recipes, &catalog, &id).await;
        });
    });

    // Body scroll follows the panel.
    Effect::new(move || {
        scroll_lock::set_locked(recipes.with(|state| state.panel.is_open()));
    });

    // Escape closes the panel; no-op while closed.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && recipes.with_untracked(|state| state.panel.is_open()) {
                recipes.update(|state| {
                    state.close_detail();
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let status = Signal::derive(move || recipes.with(|state| state.status.clone()));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Recipe Finder"</h1>
                <p class="home-page__subtitle">"Search by name or let the catalog pick something for you."</p>
            </header>

            <SearchBar on_search=on_search on_random=on_random/>

            <div id="message-area" class="home-page__status">
                <StatusMessage status=status/>
            </div>

            <ResultsGrid on_open=on_open/>

            <RecipeModal/>
        </div>
    }
}
