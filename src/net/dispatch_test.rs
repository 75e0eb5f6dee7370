use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::error::FetchError;
use crate::state::recipes::{
    DETAIL_FAILED, DETAIL_LOADING, DETAIL_NOT_FOUND, DetailPanel, PanelContent, RANDOM_FAILED, RANDOM_NOT_FOUND,
    SEARCH_FAILED, SEARCH_PROMPT, UiStatus,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Search(String),
    Random,
    Lookup(String),
}

/// In-memory catalog that records calls and the state seen mid-request.
struct FakeCatalog {
    store: Rc<RefCell<RecipeState>>,
    summaries: CatalogResult<RecipeSummary>,
    details: CatalogResult<RecipeDetail>,
    calls: RefCell<Vec<Call>>,
    seen: RefCell<Vec<RecipeState>>,
    /// Search term started by the "user" while this request is in flight.
    interleaved_search: Option<String>,
    /// Close the panel while the lookup is in flight.
    close_during_lookup: bool,
}

impl FakeCatalog {
    fn new(store: &Rc<RefCell<RecipeState>>) -> Self {
        Self {
            store: Rc::clone(store),
            summaries: Ok(None),
            details: Ok(None),
            calls: RefCell::new(Vec::new()),
            seen: RefCell::new(Vec::new()),
            interleaved_search: None,
            close_during_lookup: false,
        }
    }

    fn with_summaries(mut self, summaries: CatalogResult<RecipeSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    fn with_details(mut self, details: CatalogResult<RecipeDetail>) -> Self {
        self.details = details;
        self
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        self.seen.borrow_mut().push(self.store.borrow().clone());
        if let Some(term) = &self.interleaved_search {
            let _ = self.store.borrow_mut().begin_search(term);
        }
        if self.close_during_lookup {
            self.store.borrow_mut().close_detail();
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl RecipeCatalog for FakeCatalog {
    async fn search_by_name(&self, term: &str) -> CatalogResult<RecipeSummary> {
        self.record(Call::Search(term.to_owned()));
        self.summaries.clone()
    }

    async fn random(&self) -> CatalogResult<RecipeSummary> {
        self.record(Call::Random);
        self.summaries.clone()
    }

    async fn lookup_by_id(&self, id: &str) -> CatalogResult<RecipeDetail> {
        self.record(Call::Lookup(id.to_owned()));
        self.details.clone()
    }
}

fn store() -> Rc<RefCell<RecipeState>> {
    Rc::new(RefCell::new(RecipeState::default()))
}

fn summary(id: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_owned(),
        name: format!("Recipe {id}"),
        thumbnail: format!("https://img/{id}.jpg"),
    }
}

fn detail(id: &str) -> RecipeDetail {
    serde_json::from_value(serde_json::json!({
        "idMeal": id,
        "strMeal": "Carrot Stew",
        "strIngredient7": "Carrots",
        "strMeasure7": null
    }))
    .unwrap()
}

// =============================================================
// search_by_name
// =============================================================

#[test]
fn search_issues_one_request_with_trimmed_term() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(Some(vec![summary("1")])));

    block_on(search_by_name(&*store, &catalog, "  chicken  "));

    assert_eq!(catalog.calls(), vec![Call::Search("chicken".to_owned())]);
}

#[test]
fn search_clears_grid_before_response_is_handled() {
    let store = store();
    store.borrow_mut().results = vec![summary("old")];
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(Some(vec![summary("new")])));

    block_on(search_by_name(&*store, &catalog, "pie"));

    let seen = catalog.seen.borrow();
    assert!(seen[0].results.is_empty());
    assert_eq!(seen[0].status, UiStatus::Loading("Searching for \"pie\"...".to_owned()));
    assert_eq!(store.borrow().results, vec![summary("new")]);
}

#[test]
fn blank_search_issues_no_request() {
    let store = store();
    let catalog = FakeCatalog::new(&store);

    block_on(search_by_name(&*store, &catalog, " \t "));

    assert!(catalog.calls().is_empty());
    assert_eq!(store.borrow().status, UiStatus::Notice(SEARCH_PROMPT.to_owned()));
}

#[test]
fn search_renders_one_card_per_entry_in_order() {
    let store = store();
    let list = vec![summary("3"), summary("1"), summary("2")];
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(Some(list)));

    block_on(search_by_name(&*store, &catalog, "stew"));

    let state = store.borrow();
    let ids: Vec<_> = state.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(state.status, UiStatus::Idle);
}

#[test]
fn search_null_marker_shows_not_found_notice() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(None));

    block_on(search_by_name(&*store, &catalog, "zzz"));

    assert_eq!(
        store.borrow().status,
        UiStatus::Notice("No recipes found for \"zzz\".".to_owned())
    );
}

#[test]
fn search_failure_shows_generic_error() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_summaries(Err(FetchError::Transport("offline".to_owned())));

    block_on(search_by_name(&*store, &catalog, "soup"));

    assert_eq!(store.borrow().status, UiStatus::Error(SEARCH_FAILED.to_owned()));
    assert!(store.borrow().results.is_empty());
}

#[test]
fn newer_search_started_mid_request_wins() {
    let store = store();
    let mut catalog = FakeCatalog::new(&store).with_summaries(Ok(Some(vec![summary("beef")])));
    catalog.interleaved_search = Some("pork".to_owned());

    block_on(search_by_name(&*store, &catalog, "beef"));

    let state = store.borrow();
    assert!(state.results.is_empty());
    assert_eq!(state.status, UiStatus::Loading("Searching for \"pork\"...".to_owned()));
}

// =============================================================
// fetch_random
// =============================================================

#[test]
fn random_issues_one_request_and_renders_result() {
    let store = store();
    store.borrow_mut().results = vec![summary("old")];
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(Some(vec![summary("52772")])));

    block_on(fetch_random(&*store, &catalog));

    assert_eq!(catalog.calls(), vec![Call::Random]);
    assert!(catalog.seen.borrow()[0].results.is_empty());
    assert_eq!(store.borrow().results, vec![summary("52772")]);
}

#[test]
fn random_null_marker_shows_notice() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_summaries(Ok(None));

    block_on(fetch_random(&*store, &catalog));

    assert_eq!(store.borrow().status, UiStatus::Notice(RANDOM_NOT_FOUND.to_owned()));
}

#[test]
fn random_failure_shows_generic_error() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_summaries(Err(FetchError::Status(502)));

    block_on(fetch_random(&*store, &catalog));

    assert_eq!(store.borrow().status, UiStatus::Error(RANDOM_FAILED.to_owned()));
}

// =============================================================
// fetch_detail_by_id
// =============================================================

#[test]
fn detail_shows_loading_placeholder_during_request() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_details(Ok(Some(vec![detail("52772")])));

    block_on(fetch_detail_by_id(&*store, &catalog, "52772"));

    assert_eq!(catalog.calls(), vec![Call::Lookup("52772".to_owned())]);
    assert_eq!(
        catalog.seen.borrow()[0].panel.content(),
        Some(&PanelContent::Status(UiStatus::Loading(DETAIL_LOADING.to_owned())))
    );
    assert_eq!(
        store.borrow().panel.content(),
        Some(&PanelContent::Recipe(detail("52772")))
    );
}

#[test]
fn detail_null_marker_shows_not_found() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_details(Ok(None));

    block_on(fetch_detail_by_id(&*store, &catalog, "0"));

    assert_eq!(
        store.borrow().panel.content(),
        Some(&PanelContent::Status(UiStatus::Notice(DETAIL_NOT_FOUND.to_owned())))
    );
}

#[test]
fn detail_failure_shows_generic_error() {
    let store = store();
    let catalog = FakeCatalog::new(&store).with_details(Err(FetchError::Decode("eof".to_owned())));

    block_on(fetch_detail_by_id(&*store, &catalog, "1"));

    assert_eq!(
        store.borrow().panel.content(),
        Some(&PanelContent::Status(UiStatus::Error(DETAIL_FAILED.to_owned())))
    );
}

#[test]
fn detail_response_after_close_is_dropped() {
    let store = store();
    let mut catalog = FakeCatalog::new(&store).with_details(Ok(Some(vec![detail("1")])));
    catalog.close_during_lookup = true;

    block_on(fetch_detail_by_id(&*store, &catalog, "1"));

    assert_eq!(store.borrow().panel, DetailPanel::Closed);
}

#[test]
fn detail_does_not_touch_result_grid() {
    let store = store();
    store.borrow_mut().results = vec![summary("1"), summary("2")];
    let catalog = FakeCatalog::new(&store).with_details(Ok(Some(vec![detail("1")])));

    block_on(fetch_detail_by_id(&*store, &catalog, "1"));

    assert_eq!(store.borrow().results, vec![summary("1"), summary("2")]);
}
