//! Shopping cart aggregation.
//!
//! Repeated additions of the same product merge into one line with a
//! quantity counter. Totals are computed from the lines on every read.

mod intent;
mod reducer;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::{CartLine, CartState};
