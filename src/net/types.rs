//! Wire schema for TheMealDB responses.
//!
//! DESIGN
//! ======
//! Every endpoint answers `{ "meals": [...] }` or `{ "meals": null }`. The
//! field names are fixed upstream (`idMeal`, `strMeal`, ...). Detail records
//! carry ingredients as twenty positional `strIngredientN`/`strMeasureN`
//! pairs; those are folded into a `Vec<Ingredient>` during deserialization so
//! the rest of the client only sees trimmed, optional values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Highest ingredient position the catalog schema defines.
pub const MAX_INGREDIENTS: usize = 20;

/// Top-level response body shared by all three endpoints.
///
/// `meals` is `None` when the catalog returns its `null` "no results" marker.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsEnvelope<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

/// A search or random result, enough to render one card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecipeSummary {
    /// Catalog identifier, passed verbatim to the lookup endpoint.
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name; empty when the catalog sends `null`.
    #[serde(rename = "strMeal", default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    /// Thumbnail image URL; empty when the catalog has none.
    #[serde(rename = "strMealThumb", default, deserialize_with = "deserialize_nullable_string")]
    pub thumbnail: String,
}

/// One qualifying ingredient row from a detail record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name, trimmed and never empty.
    pub name: String,
    /// Quantity text, trimmed; `None` when absent or blank.
    pub measure: Option<String>,
}

/// A full recipe as returned by the lookup endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    /// Freeform instructions; `None` when absent or blank.
    pub instructions: Option<String>,
    /// Ingredients in position order (1..=20), absent positions skipped.
    pub ingredients: Vec<Ingredient>,
    pub video_url: Option<String>,
}

/// Detail record exactly as the catalog sends it.
#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video_url: Option<String>,
    /// Everything else, including the positional ingredient/measure fields.
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

impl From<RawMeal> for RecipeDetail {
    fn from(raw: RawMeal) -> Self {
        let ingredients = scan_ingredients(&raw.rest);
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            thumbnail: raw.thumbnail.unwrap_or_default(),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            instructions: raw.instructions.filter(|text| !text.trim().is_empty()),
            ingredients,
            video_url: non_blank(raw.video_url),
        }
    }
}

/// Collect positions 1..=[`MAX_INGREDIENTS`] whose ingredient is non-empty
/// after trimming. The paired measure is trimmed independently.
fn scan_ingredients(fields: &HashMap<String, serde_json::Value>) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENTS)
        .filter_map(|position| {
            let name = text_field(fields, &format!("strIngredient{position}"))?;
            let measure = text_field(fields, &format!("strMeasure{position}"));
            Some(Ingredient { name, measure })
        })
        .collect()
}

/// Trimmed string value for `key`; `None` for missing, null, non-string or
/// blank values.
fn text_field(fields: &HashMap<String, serde_json::Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
