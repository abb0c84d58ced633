use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// User pressed "add to cart" on a displayed product.
    Add(Product),
}

impl Intent for CartIntent {}
