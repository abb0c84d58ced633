//! Catalog browsing state.
//!
//! Holds the search intent (query text + category filter), the category
//! set, the committed product listing, the loading flag and the fetch
//! generation used to reject superseded results.
//!
//! - `state.rs` - `CatalogState`, `SearchIntent`, `CategoryFilter`, `ListingView`
//! - `intent.rs` - user input and fetch results
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, CategoryFilter, ListingView, SearchIntent, SKELETON_CARDS};
