//! Query dispatcher: one user action, one catalog request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local`. Each operation begins on the shared
//! state (loading message, cleared grid or panel placeholder), awaits exactly
//! one catalog call, then finishes on the shared state. Nothing is retried;
//! failures are logged and mapped to the call site's generic message.
//!
//! The catalog and the state holder are traits so the same flow runs against
//! `gloo-net` + `RwSignal` in the browser and against in-memory fakes in tests.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use super::api::CatalogResult;
use super::types::{RecipeDetail, RecipeSummary};
use crate::state::recipes::{RecipeState, ResultsQuery, ResultsTicket};

/// Read-only access to the upstream recipe catalog.
#[allow(async_fn_in_trait)]
pub trait RecipeCatalog {
    /// Recipes whose name matches `term`.
    async fn search_by_name(&self, term: &str) -> CatalogResult<RecipeSummary>;

    /// A single randomly chosen recipe.
    async fn random(&self) -> CatalogResult<RecipeSummary>;

    /// The full record for `id`.
    async fn lookup_by_id(&self, id: &str) -> CatalogResult<RecipeDetail>;
}

/// Somewhere the shared `RecipeState` can be mutated.
pub trait StateStore {
    /// Run `f` against the state. `None` if the store is gone (disposed signal).
    fn update_state<R>(&self, f: impl FnOnce(&mut RecipeState) -> R) -> Option<R>;
}

impl StateStore for RwSignal<RecipeState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut RecipeState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateStore for RefCell<RecipeState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut RecipeState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Search by name. A blank term shows the prompt and issues no request.
pub async fn search_by_name<S, C>(store: &S, catalog: &C, raw_term: &str)
where
    S: StateStore,
    C: RecipeCatalog,
{
    let Some(ticket) = store.update_state(|state| state.begin_search(raw_term)).flatten() else {
        return;
    };
    run_results_query(store, catalog, ticket).await;
}

/// Fetch one random recipe into the grid.
pub async fn fetch_random<S, C>(store: &S, catalog: &C)
where
    S: StateStore,
    C: RecipeCatalog,
{
    let Some(ticket) = store.update_state(RecipeState::begin_random) else {
        return;
    };
    run_results_query(store, catalog, ticket).await;
}

async fn run_results_query<S, C>(store: &S, catalog: &C, ticket: ResultsTicket)
where
    S: StateStore,
    C: RecipeCatalog,
{
    let outcome = match ticket.query() {
        ResultsQuery::Search(term) => catalog.search_by_name(term).await,
        ResultsQuery::Random => catalog.random().await,
    };
    if let Err(err) = &outcome {
        log::warn!("recipe {:?} request failed: {err}", ticket.query());
    }
    let applied = store.update_state(|state| state.finish_results(&ticket, outcome));
    if applied == Some(false) {
        log::debug!("discarding stale {:?} response", ticket.query());
    }
}

/// Open the detail panel for `id` and fill it from the lookup endpoint.
pub async fn fetch_detail_by_id<S, C>(store: &S, catalog: &C, id: &str)
where
    S: StateStore,
    C: RecipeCatalog,
{
    let Some(ticket) = store.update_state(|state| state.open_detail(id)) else {
        return;
    };
    let outcome = catalog.lookup_by_id(ticket.id()).await;
    if let Err(err) = &outcome {
        log::warn!("recipe lookup for {} failed: {err}", ticket.id());
    }
    let applied = store.update_state(|state| state.finish_detail(&ticket, outcome));
    if applied == Some(false) {
        log::debug!("discarding stale lookup response for {}", ticket.id());
    }
}
