use crate::actor_framework::{ListenerId, Response, Subscription};
use crate::cart::CartAction;
use crate::domain::{Product, ProductCatalogResponse};
use crate::error::FetchError;
use super::events::{CatalogEvent, CatalogPhase};

/// Messages accepted by [`CatalogViewModel`](super::CatalogViewModel).
#[derive(Debug)]
pub enum CatalogRequest {
    Start {
        respond_to: Response<()>,
    },
    Apply {
        index: usize,
        action: CartAction,
        respond_to: Response<bool>,
    },
    Snapshot {
        respond_to: Response<Vec<Product>>,
    },
    GetProduct {
        index: usize,
        respond_to: Response<Option<Product>>,
    },
    TotalPrice {
        respond_to: Response<f64>,
    },
    Phase {
        respond_to: Response<CatalogPhase>,
    },
    Subscribe {
        respond_to: Response<Subscription<CatalogEvent>>,
    },
    Unsubscribe {
        id: ListenerId,
        respond_to: Response<bool>,
    },
    /// Posted by the fetch task once the catalog source answers.
    FetchCompleted {
        result: Result<ProductCatalogResponse, FetchError>,
    },
}
