//! Detail view for one recipe inside the overlay panel.
//!
//! Sections render in a fixed order: title, image, category, area,
//! ingredients, instructions, video. Optional sections disappear entirely
//! when their data is absent.

#[cfg(test)]
#[path = "recipe_detail_test.rs"]
mod recipe_detail_test;

use leptos::prelude::*;

use crate::net::types::{Ingredient, RecipeDetail};

pub const INSTRUCTIONS_PLACEHOLDER: &str = "Instructions not available.";

/// List item text: `"{measure} {name}"`, or just the name without a measure.
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    match &ingredient.measure {
        Some(measure) => format!("{measure} {}", ingredient.name),
        None => ingredient.name.clone(),
    }
}

/// Instruction text split on `\n` / `\r\n`; each boundary becomes a `<br/>`.
/// Missing instructions yield the placeholder line.
pub fn instruction_lines(instructions: Option<&str>) -> Vec<String> {
    match instructions {
        Some(text) => text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect(),
        None => vec![INSTRUCTIONS_PLACEHOLDER.to_owned()],
    }
}

#[component]
pub fn RecipeDetailView(recipe: RecipeDetail) -> impl IntoView {
    let RecipeDetail {
        name,
        thumbnail,
        category,
        area,
        instructions,
        ingredients,
        video_url,
        ..
    } = recipe;

    let ingredient_items = ingredients.iter().map(ingredient_line).collect::<Vec<_>>();
    let lines = instruction_lines(instructions.as_deref());

    view! {
        <h2>{name.clone()}</h2>
        <img src=thumbnail alt=name/>
        {category.map(|category| view! { <h3>"Category: " {category}</h3> })}
        {area.map(|area| view! { <h3>"Area: " {area}</h3> })}
        {(!ingredient_items.is_empty())
            .then(|| {
                view! {
                    <h3>"Ingredients"</h3>
                    <ul>
                        {ingredient_items
                            .into_iter()
                            .map(|item| view! { <li>{item}</li> })
                            .collect_view()}
                    </ul>
                }
            })}
        <h3>"Instructions"</h3>
        <p>
            {lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| view! { {(i > 0).then(|| view! { <br/> })} {line} })
                .collect_view()}
        </p>
        {video_url
            .map(|url| {
                view! {
                    <h3>"Video Recipe"</h3>
                    <div class="video-wrapper">
                        <a href=url target="_blank" rel="noopener noreferrer">
                            "Watch on YouTube"
                        </a>
                    </div>
                }
            })}
    }
}
