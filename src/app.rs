//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::CatalogConfig;
use crate::pages::home::HomePage;
use crate::state::recipes::RecipeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single shared `RecipeState` and the catalog configuration,
/// provides both as context, and mounts the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let recipes = RwSignal::new(RecipeState::default());
    provide_context(recipes);
    provide_context(CatalogConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/recipe-finder.css"/>
        <Title text="Recipe Finder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
