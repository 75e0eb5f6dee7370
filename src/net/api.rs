//! HTTP client for the recipe catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `FetchError::Unavailable` since the
//! catalog is only queried from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single attempt. Transport, status and decode failures are
//! returned as `FetchError`; a `{ "meals": null }` body is `Ok(None)`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::dispatch::RecipeCatalog;
use super::error::FetchError;
use super::types::{RecipeDetail, RecipeSummary};
use crate::config::CatalogConfig;

/// Outcome of one catalog request: `None` is the upstream "no results" marker.
pub type CatalogResult<T> = Result<Option<Vec<T>>, FetchError>;

/// Query parameter carrying the search term.
pub const SEARCH_PARAM: &str = "s";
/// Query parameter carrying the recipe id.
pub const LOOKUP_PARAM: &str = "i";

/// TheMealDB-backed catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealDbCatalog {
    config: CatalogConfig,
}

impl MealDbCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

impl RecipeCatalog for MealDbCatalog {
    async fn search_by_name(&self, term: &str) -> CatalogResult<RecipeSummary> {
        get_meals(&self.config.search_endpoint(), &[(SEARCH_PARAM, term)]).await
    }

    async fn random(&self) -> CatalogResult<RecipeSummary> {
        get_meals(&self.config.random_endpoint(), &[]).await
    }

    async fn lookup_by_id(&self, id: &str) -> CatalogResult<RecipeDetail> {
        get_meals(&self.config.lookup_endpoint(), &[(LOOKUP_PARAM, id)]).await
    }
}

/// `GET url?query` and unwrap the `meals` envelope.
async fn get_meals<T>(url: &str, query: &[(&str, &str)]) -> CatalogResult<T>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .query(query.iter().copied())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body: super::types::MealsEnvelope<T> =
            resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body.meals)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, query);
        Err(FetchError::Unavailable)
    }
}
