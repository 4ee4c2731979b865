use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while fetching the product catalog.
///
/// The `Display` text is what listeners receive in
/// [`CatalogEvent::Error`](crate::catalog_actor::CatalogEvent::Error).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Catalog endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Catalog decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Catalog transport error: {0}")]
    Transport(String),
}

/// Errors surfaced by [`CatalogClient`](crate::clients::CatalogClient) calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        CatalogError::ActorCommunication(e.to_string())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}
