use tracing::{debug, warn};

use crate::domain::Product;
use super::actions::CartAction;

/// The in-memory catalog snapshot together with each product's selection.
///
/// Every mutation moves exactly one unit between `stock` and
/// `selected_amount`, so `Product::units` never changes for a product.
/// Operations on an index outside the snapshot are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    products: Vec<Product>,
}

impl CartState {
    pub fn new(products: Vec<Product>) -> Self {
        let mut state = Self::default();
        state.replace(products);
        state
    }

    /// Installs a fresh snapshot with every selection cleared.
    pub fn replace(&mut self, mut products: Vec<Product>) {
        for product in &mut products {
            product.selected_amount = None;
        }
        self.products = products;
    }

    /// Moves one unit of the product at `index` from stock into the cart.
    ///
    /// Returns `true` if the state changed.
    pub fn increment(&mut self, index: usize) -> bool {
        let Some(product) = self.slot(index) else {
            return false;
        };
        if product.stock == 0 {
            debug!(index, "Product out of stock");
            return false;
        }
        product.selected_amount = Some(product.selected() + 1);
        product.stock -= 1;
        true
    }

    /// Moves one unit of the product at `index` from the cart back into stock.
    ///
    /// Returns `true` if the state changed.
    pub fn decrement(&mut self, index: usize) -> bool {
        let Some(product) = self.slot(index) else {
            return false;
        };
        let selected = product.selected();
        if selected == 0 {
            debug!(index, "Product not in cart");
            return false;
        }
        product.selected_amount = Some(selected - 1);
        product.stock += 1;
        true
    }

    pub fn apply(&mut self, index: usize, action: CartAction) -> bool {
        match action {
            CartAction::Increment => self.increment(index),
            CartAction::Decrement => self.decrement(index),
        }
    }

    /// Sum of `price * selected amount` over the snapshot.
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(Product::line_total).sum()
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn selected_amount(&self, index: usize) -> Option<u32> {
        self.products.get(index).and_then(|product| product.selected_amount)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn slot(&mut self, index: usize) -> Option<&mut Product> {
        let len = self.products.len();
        let slot = self.products.get_mut(index);
        if slot.is_none() {
            warn!(index, len, "Ignoring out-of-range product index");
        }
        slot
    }
}
