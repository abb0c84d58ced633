use tokio::sync::mpsc;

use crate::api::{ApiError, Product};

/// Results sent from background fetch tasks to the event loop.
#[derive(Debug)]
pub enum CatalogEvent {
    /// A product fetch resolved (or failed) for the given generation.
    ProductsFetched {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    /// Bootstrap fetched the category list.
    CategoriesLoaded(Vec<String>),
}

pub type CatalogEventSender = mpsc::UnboundedSender<CatalogEvent>;
