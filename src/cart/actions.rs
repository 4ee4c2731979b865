/// User gestures that move a single unit of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Moves one unit from stock into the cart.
    ///
    /// Ignored when the product has no stock left.
    Increment,
    /// Moves one unit from the cart back into stock.
    ///
    /// Ignored when nothing of the product is selected.
    Decrement,
}
