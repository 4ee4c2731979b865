//! # Mock Framework
//!
//! Utilities for testing the view-model and its clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then [`expect_apply`] to assert on gestures. Use
//! [`StaticFetcher`] for a catalog source that answers immediately, or
//! [`ChannelFetcher`] to decide from the test when and how a fetch completes.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::Response;
use crate::cart::CartAction;
use crate::catalog_actor::CatalogRequest;
use crate::clients::CatalogClient;
use crate::domain::{Product, ProductCatalogResponse};
use crate::error::FetchError;
use crate::fetcher::ProductCatalogFetcher;

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Apply request
pub async fn expect_apply(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(usize, CartAction, Response<bool>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Apply { index, action, respond_to }) => Some((index, action, respond_to)),
        _ => None,
    }
}

/// Wraps products in a single-page catalog envelope.
pub fn catalog(products: Vec<Product>) -> ProductCatalogResponse {
    let total = products.len() as u32;
    ProductCatalogResponse {
        products,
        total,
        skip: 0,
        limit: total,
    }
}

/// Catalog source that answers every fetch the same way, immediately.
pub struct StaticFetcher {
    outcome: Result<Vec<Product>, String>,
}

impl StaticFetcher {
    pub fn products(products: Vec<Product>) -> Self {
        Self { outcome: Ok(products) }
    }

    /// Fails every fetch with a [`FetchError::Transport`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { outcome: Err(message.into()) }
    }
}

#[async_trait]
impl ProductCatalogFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<ProductCatalogResponse, FetchError> {
        match &self.outcome {
            Ok(products) => Ok(catalog(products.clone())),
            Err(message) => Err(FetchError::Transport(message.clone())),
        }
    }
}

pub type FetchReply = oneshot::Sender<Result<ProductCatalogResponse, FetchError>>;

/// Catalog source that hands each fetch to the test as a reply channel.
///
/// The fetch stays pending until the test answers. Dropping the reply fails
/// the fetch.
pub struct ChannelFetcher {
    fetches: mpsc::UnboundedSender<FetchReply>,
}

impl ChannelFetcher {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FetchReply>) {
        let (fetches, receiver) = mpsc::unbounded_channel();
        (Self { fetches }, receiver)
    }
}

#[async_trait]
impl ProductCatalogFetcher for ChannelFetcher {
    async fn fetch(&self) -> Result<ProductCatalogResponse, FetchError> {
        let (reply, response) = oneshot::channel();
        self.fetches
            .send(reply)
            .map_err(|_| FetchError::Transport("Test harness gone".to_string()))?;
        response
            .await
            .map_err(|_| FetchError::Transport("Fetch abandoned".to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_fetcher_waits_for_reply() {
        let (fetcher, mut fetches) = ChannelFetcher::new();
        let task = tokio::spawn(async move { fetcher.fetch().await });

        let reply = fetches.recv().await.expect("Expected a fetch");
        reply.send(Ok(catalog(vec![Product::new(1, "A", 1.0, 1)]))).unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.products[0].title, "A");
    }

    #[tokio::test]
    async fn test_channel_fetcher_dropped_reply_fails() {
        let (fetcher, mut fetches) = ChannelFetcher::new();
        let task = tokio::spawn(async move { fetcher.fetch().await });

        drop(fetches.recv().await.expect("Expected a fetch"));

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Catalog transport error: Fetch abandoned");
    }
}
