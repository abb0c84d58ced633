//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user input (typed text, category choice, add to cart)
/// or results delivered by background fetches.
pub trait Intent: Send + 'static {}
