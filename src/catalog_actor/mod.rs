//! The catalog view-model actor: owns the cart for one session, drives the
//! catalog fetch, and republishes state changes to listeners.

pub mod events;
pub mod messages;
pub mod view_model;

pub use events::*;
pub use messages::*;
pub use view_model::*;
