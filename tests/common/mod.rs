//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront::api::{ApiError, CatalogApi, Endpoint, Product, ProductId, ProductQuery};
use storefront::catalog::{CatalogEvent, QueryController};
use storefront::ui::app::App;
use tokio::sync::{mpsc, oneshot};

pub type EventReceiver = mpsc::UnboundedReceiver<CatalogEvent>;

/// Find an available port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn product(id: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: format!("Description of {id}"),
        price,
        image: None,
        rating: None,
        category: None,
    }
}

pub fn status_error(endpoint: Endpoint, status: u16) -> ApiError {
    ApiError::Status { endpoint, status }
}

// -- Scripted catalog ---------------------------------------------------------

/// A product request waiting for the test to resolve it.
pub struct PendingFetch {
    pub query: ProductQuery,
    reply: oneshot::Sender<Result<Vec<Product>, ApiError>>,
}

impl PendingFetch {
    /// Returns false if the requesting task was already cancelled.
    pub fn resolve(self, items: Vec<Product>) -> bool {
        self.reply.send(Ok(items)).is_ok()
    }

    pub fn fail(self, err: ApiError) -> bool {
        self.reply.send(Err(err)).is_ok()
    }
}

/// In-memory `CatalogApi` whose product requests resolve only when the test
/// says so, in whatever order it chooses.
pub struct ScriptedCatalog {
    pending: Mutex<Vec<PendingFetch>>,
    queries: Mutex<Vec<ProductQuery>>,
    categories: Option<Vec<String>>,
    seed_fails: bool,
    seed_calls: AtomicUsize,
    category_calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            categories: Some(Vec::new()),
            seed_fails: false,
            seed_calls: AtomicUsize::new(0),
            category_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_categories(mut self, names: &[&str]) -> Self {
        self.categories = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_failing_categories(mut self) -> Self {
        self.categories = None;
        self
    }

    pub fn with_failing_seed(mut self) -> Self {
        self.seed_fails = true;
        self
    }

    /// Every product query issued so far, in order.
    pub fn queries(&self) -> Vec<ProductQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn seed_calls(&self) -> usize {
        self.seed_calls.load(Ordering::SeqCst)
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }

    /// Removes and returns every unresolved request, oldest first.
    pub fn take_pending(&self) -> Vec<PendingFetch> {
        std::mem::take(&mut *self.pending.lock().unwrap())
    }

    /// Removes and returns the newest unresolved request.
    pub fn take_latest(&self) -> PendingFetch {
        self.pending
            .lock()
            .unwrap()
            .pop()
            .expect("no pending product request")
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    async fn seed(&self) -> Result<(), ApiError> {
        self.seed_calls.fetch_add(1, Ordering::SeqCst);
        if self.seed_fails {
            return Err(status_error(Endpoint::Seed, 500));
        }
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.categories
            .clone()
            .ok_or_else(|| status_error(Endpoint::Categories, 503))
    }

    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let (reply, receiver) = oneshot::channel();
        self.pending.lock().unwrap().push(PendingFetch {
            query: query.clone(),
            reply,
        });
        self.queries.lock().unwrap().push(query.clone());

        match receiver.await {
            Ok(result) => result,
            // Test dropped the request without answering: stay outstanding.
            Err(_) => std::future::pending().await,
        }
    }
}

// -- Builders & waiting -------------------------------------------------------

pub fn controller(api: Arc<ScriptedCatalog>) -> (QueryController, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (QueryController::new(api, tx), rx)
}

pub fn make_app(api: Arc<ScriptedCatalog>) -> (App, EventReceiver) {
    let (controller, rx) = controller(api);
    (App::new(controller, "http://backend.test"), rx)
}

/// Lets spawned tasks run until `api` has seen `count` product requests.
pub async fn wait_for_requests(api: &ScriptedCatalog, count: usize) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while api.request_count() < count {
            tokio::task::yield_now().await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("expected {count} product requests, saw {}", api.request_count()));
}

pub async fn next_event(rx: &mut EventReceiver) -> CatalogEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for catalog event")
        .expect("catalog event channel closed")
}

/// Applies every event that arrives until the channel goes quiet.
pub async fn drain_into(controller: &mut QueryController, rx: &mut EventReceiver) -> usize {
    let mut applied = 0;
    while let Ok(Some(event)) = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await {
        controller.apply(event);
        applied += 1;
    }
    applied
}

/// Asserts that no event arrives within a short window.
pub async fn assert_no_event(rx: &mut EventReceiver) {
    if let Ok(Some(event)) = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await {
        panic!("unexpected catalog event: {event:?}");
    }
}
