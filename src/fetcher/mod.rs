//! The catalog source consumed by the view-model.

pub mod http;

use async_trait::async_trait;

use crate::domain::ProductCatalogResponse;
use crate::error::FetchError;

pub use http::HttpCatalogFetcher;

/// Asynchronous, single-shot source of the whole product catalog.
#[async_trait]
pub trait ProductCatalogFetcher: Send + Sync + 'static {
    async fn fetch(&self) -> Result<ProductCatalogResponse, FetchError>;
}
