//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Both storefront state machines (catalog and cart) are expressed as
//! reducers. Side effects such as spawning or aborting fetches happen in the
//! owner around the `dispatch` call, never inside `reduce`.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
