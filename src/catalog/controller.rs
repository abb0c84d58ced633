use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::api::CatalogApi;
use crate::catalog::event::{CatalogEvent, CatalogEventSender};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState, CategoryFilter};
use crate::ui::mvi::dispatch;

/// An outstanding product fetch.
struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Owns the search intent and the product listing.
///
/// All mutation happens on the caller's task through the methods below.
/// Fetches run as spawned tasks and report back through the event channel;
/// the owner feeds those events into [`QueryController::apply`].
pub struct QueryController {
    api: Arc<dyn CatalogApi>,
    state: CatalogState,
    events: CatalogEventSender,
    in_flight: Option<InFlight>,
    bootstrap: Option<JoinHandle<()>>,
    initialized: bool,
    torn_down: bool,
}

impl QueryController {
    pub fn new(api: Arc<dyn CatalogApi>, events: CatalogEventSender) -> Self {
        Self {
            api,
            state: CatalogState::default(),
            events,
            in_flight: None,
            bootstrap: None,
            initialized: false,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// True while a product fetch task is still running.
    pub fn has_pending_fetch(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| !in_flight.handle.is_finished())
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// One-time bootstrap: seed the backend, then load categories.
    ///
    /// Both steps are best effort. A seed failure does not prevent the
    /// category fetch, and a category failure leaves the set empty.
    pub fn initialize(&mut self) {
        if self.initialized || self.torn_down {
            return;
        }
        self.initialized = true;

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        self.bootstrap = Some(tokio::spawn(async move {
            if let Err(err) = api.seed().await {
                tracing::debug!(error = %err, "Catalog seed failed, continuing");
            }

            match api.categories().await {
                Ok(categories) => {
                    tracing::debug!(count = categories.len(), "Categories loaded");
                    let _ = events.send(CatalogEvent::CategoriesLoaded(categories));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to load categories");
                }
            }
        }));
    }

    /// Starts the initial fetch cycle for the empty query and `All`.
    pub fn mount(&mut self) {
        self.dispatch(CatalogIntent::Reload);
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.dispatch(CatalogIntent::SetQueryText(text.into()));
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.dispatch(CatalogIntent::SetCategory(category));
    }

    /// Folds a background result into state.
    pub fn apply(&mut self, event: CatalogEvent) {
        if self.torn_down {
            tracing::debug!("Ignoring catalog event after teardown");
            return;
        }

        match event {
            CatalogEvent::ProductsFetched { generation, result } => {
                if !self.state.is_current(generation) {
                    tracing::debug!(
                        generation,
                        current = self.state.generation(),
                        "Discarding superseded product fetch"
                    );
                    return;
                }
                self.in_flight = None;

                match result {
                    Ok(items) => {
                        tracing::debug!(generation, count = items.len(), "Products loaded");
                        dispatch::<CatalogReducer>(
                            &mut self.state,
                            CatalogIntent::ProductsLoaded { generation, items },
                        );
                    }
                    Err(err) => {
                        tracing::warn!(
                            generation,
                            error = %err,
                            "Product fetch failed, keeping previous listing"
                        );
                        dispatch::<CatalogReducer>(
                            &mut self.state,
                            CatalogIntent::ProductsFailed { generation },
                        );
                    }
                }
            }
            CatalogEvent::CategoriesLoaded(categories) => {
                self.bootstrap = None;
                dispatch::<CatalogReducer>(
                    &mut self.state,
                    CatalogIntent::CategoriesLoaded(categories),
                );
            }
        }
    }

    /// Cancels outstanding work. Later events and input are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.cancel_in_flight();
        if let Some(bootstrap) = self.bootstrap.take() {
            bootstrap.abort();
        }
        tracing::debug!("Query controller torn down");
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        if self.torn_down {
            return;
        }
        let before = self.state.generation();
        dispatch::<CatalogReducer>(&mut self.state, intent);
        if self.state.generation() != before {
            self.start_cycle();
        }
    }

    fn start_cycle(&mut self) {
        self.cancel_in_flight();

        let generation = self.state.generation();
        let query = self.state.search().to_query();
        tracing::debug!(generation, ?query, "Starting product fetch");

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            let result = api.products(&query).await;
            // A closed channel means the view is gone; nothing to update.
            let _ = events.send(CatalogEvent::ProductsFetched { generation, result });
        });

        self.in_flight = Some(InFlight { generation, handle });
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            if !in_flight.handle.is_finished() {
                tracing::debug!(
                    generation = in_flight.generation,
                    "Cancelling superseded product fetch"
                );
            }
            in_flight.handle.abort();
        }
    }
}

impl Drop for QueryController {
    fn drop(&mut self) {
        self.teardown();
    }
}
