//! Cart quantity state machine: units move between a product's stock and its
//! selected amount, and the total price is derived from the selection.

mod actions;
pub mod state;

pub use actions::*;
pub use state::*;
