//! Shared recipe lookup state: status region, result grid, detail panel.
//!
//! DESIGN
//! ======
//! One `RecipeState` lives in an `RwSignal` provided at app start. Every
//! user action goes through a `begin_*` method, which updates the visible
//! state immediately and hands back a ticket, and later a `finish_*` method,
//! which applies the catalog outcome.
//!
//! Tickets carry a generation number. Beginning a search or random request
//! bumps the results generation; opening or closing the panel bumps the
//! detail generation. A finish with an older generation is discarded, so the
//! most recently issued request owns the screen even when an earlier one
//! resolves later.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::api::CatalogResult;
use crate::net::types::{RecipeDetail, RecipeSummary};

pub const SEARCH_PROMPT: &str = "Please enter a search term";
pub const RANDOM_LOADING: &str = "Fetching a random recipe...";
pub const RANDOM_NOT_FOUND: &str = "Could not fetch a random recipe.";
pub const RANDOM_FAILED: &str = "Failed to fetch. Check your connection and try again.";
pub const SEARCH_FAILED: &str = "Something went wrong. Please try again.";
pub const NO_RECIPES_TO_DISPLAY: &str = "No recipes to display";
pub const DETAIL_LOADING: &str = "Loading details...";
pub const DETAIL_NOT_FOUND: &str = "Recipe details not found.";
pub const DETAIL_FAILED: &str = "Failed to load recipe details.";

pub fn search_loading_message(term: &str) -> String {
    format!("Searching for \"{term}\"...")
}

pub fn search_not_found_message(term: &str) -> String {
    format!("No recipes found for \"{term}\".")
}

// =============================================================================
// STATUS
// =============================================================================

/// Content of a status region. Exactly one is shown at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiStatus {
    /// Nothing to say; the region renders empty.
    #[default]
    Idle,
    /// A request is in flight.
    Loading(String),
    /// Not a failure (nothing found, missing input) but shown in error style.
    Notice(String),
    /// The request failed.
    Error(String),
}

impl UiStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Loading(msg) | Self::Notice(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Notices share the error styling; only real failures are `Error`.
    pub fn is_error_styled(&self) -> bool {
        matches!(self, Self::Notice(_) | Self::Error(_))
    }
}

// =============================================================================
// DETAIL PANEL
// =============================================================================

/// What the open detail panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelContent {
    Status(UiStatus),
    Recipe(RecipeDetail),
}

/// Overlay panel lifecycle: `Closed -> Open(loading) -> Open(recipe | notice | error)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailPanel {
    #[default]
    Closed,
    Open { id: String, content: PanelContent },
}

impl DetailPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Recipe id the open panel was requested for.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open { id, .. } => Some(id),
        }
    }

    pub fn content(&self) -> Option<&PanelContent> {
        match self {
            Self::Closed => None,
            Self::Open { content, .. } => Some(content),
        }
    }

    /// Whether the open panel is still waiting on its lookup.
    pub fn is_loading(&self) -> bool {
        matches!(self.content(), Some(PanelContent::Status(status)) if status.is_loading())
    }
}

// =============================================================================
// TICKETS
// =============================================================================

/// Which request populates the result grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsQuery {
    Search(String),
    Random,
}

/// Handle for an in-flight search or random request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsTicket {
    generation: u64,
    query: ResultsQuery,
}

impl ResultsTicket {
    pub fn query(&self) -> &ResultsQuery {
        &self.query
    }
}

/// Handle for an in-flight detail lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    id: String,
}

impl DetailTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// RECIPE STATE
// =============================================================================

/// Everything the page renders, plus the request generations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeState {
    pub status: UiStatus,
    pub results: Vec<RecipeSummary>,
    pub panel: DetailPanel,
    results_generation: u64,
    detail_generation: u64,
}

impl RecipeState {
    /// Start a name search. A blank term shows the prompt notice and returns
    /// `None`; no request must be issued.
    pub fn begin_search(&mut self, raw_term: &str) -> Option<ResultsTicket> {
        let term = raw_term.trim();
        if term.is_empty() {
            self.status = UiStatus::Notice(SEARCH_PROMPT.to_owned());
            return None;
        }
        self.status = UiStatus::Loading(search_loading_message(term));
        Some(self.next_results_ticket(ResultsQuery::Search(term.to_owned())))
    }

    /// Start a random-recipe request.
    pub fn begin_random(&mut self) -> ResultsTicket {
        self.status = UiStatus::Loading(RANDOM_LOADING.to_owned());
        self.next_results_ticket(ResultsQuery::Random)
    }

    fn next_results_ticket(&mut self, query: ResultsQuery) -> ResultsTicket {
        self.results.clear();
        self.results_generation += 1;
        ResultsTicket {
            generation: self.results_generation,
            query,
        }
    }

    /// Apply a search/random outcome. Returns `false` (and changes nothing)
    /// when a newer results request has started since `ticket` was issued.
    pub fn finish_results(&mut self, ticket: &ResultsTicket, outcome: CatalogResult<RecipeSummary>) -> bool {
        if ticket.generation != self.results_generation {
            return false;
        }
        match outcome {
            Ok(Some(list)) if list.is_empty() => {
                self.results.clear();
                self.status = UiStatus::Notice(NO_RECIPES_TO_DISPLAY.to_owned());
            }
            Ok(Some(list)) => {
                self.results = list;
                self.status = UiStatus::Idle;
            }
            Ok(None) => {
                let message = match &ticket.query {
                    ResultsQuery::Search(term) => search_not_found_message(term),
                    ResultsQuery::Random => RANDOM_NOT_FOUND.to_owned(),
                };
                self.status = UiStatus::Notice(message);
            }
            Err(_) => {
                let message = match &ticket.query {
                    ResultsQuery::Search(_) => SEARCH_FAILED,
                    ResultsQuery::Random => RANDOM_FAILED,
                };
                self.status = UiStatus::Error(message.to_owned());
            }
        }
        true
    }

    /// Open the detail panel for `id` with the loading placeholder. Any
    /// previous panel content is replaced before the lookup starts.
    pub fn open_detail(&mut self, id: &str) -> DetailTicket {
        self.detail_generation += 1;
        self.panel = DetailPanel::Open {
            id: id.to_owned(),
            content: PanelContent::Status(UiStatus::Loading(DETAIL_LOADING.to_owned())),
        };
        DetailTicket {
            generation: self.detail_generation,
            id: id.to_owned(),
        }
    }

    /// Apply a lookup outcome to the panel. Returns `false` when the panel was
    /// closed or reopened since `ticket` was issued, or already left loading.
    pub fn finish_detail(&mut self, ticket: &DetailTicket, outcome: CatalogResult<RecipeDetail>) -> bool {
        if ticket.generation != self.detail_generation || !self.panel.is_loading() {
            return false;
        }
        let content = match outcome {
            Ok(Some(list)) => match list.into_iter().next() {
                Some(recipe) => PanelContent::Recipe(recipe),
                None => PanelContent::Status(UiStatus::Notice(DETAIL_NOT_FOUND.to_owned())),
            },
            Ok(None) => PanelContent::Status(UiStatus::Notice(DETAIL_NOT_FOUND.to_owned())),
            Err(_) => PanelContent::Status(UiStatus::Error(DETAIL_FAILED.to_owned())),
        };
        self.panel = DetailPanel::Open {
            id: ticket.id.clone(),
            content,
        };
        true
    }

    /// Close the panel and discard its content. Returns `false` if it was
    /// already closed.
    pub fn close_detail(&mut self) -> bool {
        if !self.panel.is_open() {
            return false;
        }
        self.detail_generation += 1;
        self.panel = DetailPanel::Closed;
        true
    }
}
