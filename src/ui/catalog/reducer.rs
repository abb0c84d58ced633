//! Reducer for the catalog state machine.

use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Pure catalog transitions.
///
/// Starting a fetch cycle bumps the generation; the caller compares the
/// generation before and after dispatch to know whether to cancel the
/// outstanding request and issue a new one.
pub struct CatalogReducer;

impl CatalogReducer {
    fn begin_cycle(mut state: CatalogState) -> CatalogState {
        state.generation = state.generation.wrapping_add(1);
        state.loading = true;
        state
    }
}

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::SetQueryText(text) => {
                if state.search.query_text == text {
                    return state;
                }
                state.search.query_text = text;
                Self::begin_cycle(state)
            }

            CatalogIntent::SetCategory(category) => {
                if state.search.category == category {
                    return state;
                }
                state.search.category = category;
                Self::begin_cycle(state)
            }

            CatalogIntent::Reload => Self::begin_cycle(state),

            CatalogIntent::ProductsLoaded { generation, items } => {
                if !state.is_current(generation) {
                    return state;
                }
                state.listing = items;
                state.loading = false;
                state
            }

            CatalogIntent::ProductsFailed { generation } => {
                if !state.is_current(generation) {
                    return state;
                }
                // Previous listing stays as it was.
                state.loading = false;
                state
            }

            CatalogIntent::CategoriesLoaded(categories) => {
                if state.categories.is_empty() {
                    state.categories = categories;
                }
                state
            }
        }
    }
}
