//! Clickable card for one search/random result.

#[cfg(test)]
#[path = "recipe_card_test.rs"]
mod recipe_card_test;

use leptos::prelude::*;

use crate::net::types::RecipeSummary;

/// A result card tagged with its recipe id. Clicking it asks the page to
/// open the detail panel for that id.
#[component]
pub fn RecipeCard(recipe: RecipeSummary, on_open: Callback<String>) -> impl IntoView {
    let RecipeSummary { id, name, thumbnail } = recipe;
    let open_id = id.clone();

    view! {
        <div class="recipe-item" data-id=id on:click=move |_| on_open.run(open_id.clone())>
            <img src=thumbnail alt=name.clone() loading="lazy"/>
            <h3>{name}</h3>
        </div>
    }
}
