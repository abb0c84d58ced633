//! Base trait for UI state.

/// Marker trait for state owned by a reducer.
///
/// States are cloned to snapshot, compared to detect change, and default
/// to the value a freshly mounted view starts from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
