//! # Store Cart
//!
//! The core of a storefront screen: one catalog fetch per session, an
//! in-memory snapshot of the products, and a cart that moves units between
//! each product's stock and its selected amount while tracking the total.
//!
//! ## Layout
//!
//! - **Domain types** - wire-decodable catalog records → [`domain::Product`]
//! - **Cart** - the quantity state machine → [`cart::CartState`]
//! - **Fetcher** - the catalog source seam and its HTTP implementation → [`fetcher::ProductCatalogFetcher`]
//! - **View-model actor** - owns the cart for one session, drives the fetch, publishes events → [`catalog_actor::CatalogViewModel`]
//! - **Client** - the handle a presentation layer calls into → [`clients::CatalogClient`]
//! - **System** - startup, shutdown, config and tracing → [`app_system::StoreSystem`]
//!
//! ## Example Usage
//!
//! ```ignore
//! let config = StoreConfig::from_env()?;
//! let fetcher = HttpCatalogFetcher::new(&config.catalog_url, config.request_timeout)?;
//! let system = StoreSystem::new(&config, Arc::new(fetcher));
//!
//! let mut events = system.catalog_client.subscribe().await?;
//! system.catalog_client.start().await?;
//!
//! if let Some(CatalogEvent::CatalogReady(products)) = events.recv().await {
//!     system.catalog_client.increment(0).await?;
//!     let total = system.catalog_client.total_price().await?;
//! }
//!
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart;
pub mod catalog_actor;
pub mod clients;
pub mod domain;
pub mod error;
pub mod fetcher;

#[cfg(test)]
mod mock_framework;
