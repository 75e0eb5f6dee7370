//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search controls, status region, result grid and
//! detail overlay while reading/writing the shared `RecipeState` from Leptos
//! context.

pub mod recipe_card;
pub mod recipe_detail;
pub mod recipe_modal;
pub mod results_grid;
pub mod search_bar;
pub mod status_message;
