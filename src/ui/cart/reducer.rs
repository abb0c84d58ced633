use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::{CartLine, CartState};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add(product) => {
                let existing = state
                    .lines
                    .iter()
                    .position(|line| line.product_id == product.id);
                match existing {
                    // Existing line keeps its first-seen title and price.
                    Some(index) => {
                        let line = &mut state.lines[index];
                        line.quantity = line.quantity.saturating_add(1);
                    }
                    None => state.lines.push(CartLine {
                        product_id: product.id,
                        title: product.title,
                        price: product.price,
                        quantity: 1,
                    }),
                }
                state
            }
        }
    }
}
