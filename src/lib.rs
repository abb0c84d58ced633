//! Terminal storefront: search a remote catalog, filter by category, and
//! collect products in an in-memory cart.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
