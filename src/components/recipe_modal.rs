//! Overlay panel showing the selected recipe.
//!
//! The panel is mounted only while `RecipeState::panel` is open, so closing
//! drops its content and the next open starts from the loading placeholder.
//! Backdrop clicks and the close button close it here; Escape is handled at
//! the window level by the page.

#[cfg(test)]
#[path = "recipe_modal_test.rs"]
mod recipe_modal_test;

use leptos::prelude::*;

use crate::components::recipe_detail::RecipeDetailView;
use crate::components::status_message::StatusMessage;
use crate::state::recipes::{PanelContent, RecipeState};

#[component]
pub fn RecipeModal() -> impl IntoView {
    let recipes = expect_context::<RwSignal<RecipeState>>();

    let close = move || {
        if recipes.with_untracked(|state| state.panel.is_open()) {
            recipes.update(|state| {
                state.close_detail();
            });
        }
    };
    let is_open = move || recipes.with(|state| state.panel.is_open());
    let content = move || recipes.with(|state| state.panel.content().cloned());
    let recipe_id = move || recipes.with(|state| state.panel.id().map(str::to_owned));

    view! {
        <Show when=is_open>
            <div id="recipe-modal" class="modal" on:click=move |_| close()>
                <div class="modal__content" on:click=move |ev| ev.stop_propagation()>
                    <button id="modal-close-btn" class="modal__close" title="Close" on:click=move |_| close()>
                        "✕"
                    </button>
                    <div id="recipe-details-content" class="modal__body" data-id=recipe_id>
                        {move || match content() {
                            Some(PanelContent::Recipe(recipe)) => {
                                view! { <RecipeDetailView recipe=recipe/> }.into_any()
                            }
                            Some(PanelContent::Status(status)) => {
                                view! { <StatusMessage status=status/> }.into_any()
                            }
                            None => ().into_any(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
