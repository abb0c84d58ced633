//! Query controller: drives catalog fetches from the search intent.
//!
//! Every change to the query text or category filter starts a fetch cycle.
//! Starting a cycle aborts the previous one, and results are tagged with the
//! generation that requested them so a result that slipped through before
//! the abort is still discarded when it is applied.

mod controller;
mod event;

pub use controller::QueryController;
pub use event::{CatalogEvent, CatalogEventSender};
