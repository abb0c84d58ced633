//! Intents for the catalog state machine.

use crate::api::Product;
use crate::ui::catalog::state::CategoryFilter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Search box contents changed. Starts a fetch cycle when the text differs.
    SetQueryText(String),

    /// Category filter changed. Starts a fetch cycle when the filter differs.
    SetCategory(CategoryFilter),

    /// Start a fetch cycle for the current intent (initial mount).
    Reload,

    /// A product fetch resolved. Committed only if `generation` is current.
    ProductsLoaded { generation: u64, items: Vec<Product> },

    /// A product fetch failed. Clears loading only if `generation` is current.
    ProductsFailed { generation: u64 },

    /// Category list arrived from the one-time bootstrap.
    CategoriesLoaded(Vec<String>),
}

impl Intent for CatalogIntent {}
