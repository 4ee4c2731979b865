//! Handles the presentation layer uses to talk to the view-model actor.

#[macro_use]
mod macros;
pub mod catalog_client;

pub use catalog_client::*;
