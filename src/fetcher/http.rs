//! HTTP catalog source backed by [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::ProductCatalogResponse;
use crate::error::FetchError;
use super::ProductCatalogFetcher;

/// Fetches `GET {base_url}/products` and decodes the catalog envelope.
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogFetcher {
    /// Builds a fetcher with its own client and a per-request timeout.
    ///
    /// * `base_url` - Catalog host, e.g. `https://dummyjson.com`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Builds a fetcher reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ProductCatalogFetcher for HttpCatalogFetcher {
    #[instrument(skip(self), fields(url = %self.products_url()))]
    async fn fetch(&self) -> Result<ProductCatalogResponse, FetchError> {
        debug!("Requesting catalog");
        let response = self.client.get(self.products_url()).send().await?;
        let body = Self::ensure_success(response).await?.text().await?;
        let catalog: ProductCatalogResponse = serde_json::from_str(&body)?;
        debug!(products = catalog.products.len(), total = catalog.total, "Catalog decoded");
        Ok(catalog)
    }
}
