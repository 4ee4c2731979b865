use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::actor_framework::{request, ListenerId, Subscription};
use crate::cart::CartAction;
use crate::catalog_actor::{CatalogEvent, CatalogPhase, CatalogRequest};
use crate::domain::Product;
use crate::error::CatalogError;

/// Cloneable handle to a running [`CatalogViewModel`](crate::catalog_actor::CatalogViewModel).
///
/// Every call waits for the actor's reply, so calls made from one task are
/// applied in the order they were made.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    /// Moves one unit of the product at `index` into the cart.
    ///
    /// Returns `Ok(false)` when nothing changed: no stock left, or no product
    /// at that index.
    pub async fn increment(&self, index: usize) -> Result<bool, CatalogError> {
        self.apply(index, CartAction::Increment).await
    }

    /// Moves one unit of the product at `index` back into stock.
    pub async fn decrement(&self, index: usize) -> Result<bool, CatalogError> {
        self.apply(index, CartAction::Decrement).await
    }

    #[instrument(skip(self))]
    async fn apply(&self, index: usize, action: CartAction) -> Result<bool, CatalogError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Apply {
            index,
            action,
            respond_to,
        })
        .await
        .map_err(CatalogError::from)
    }

    /// Registers a listener. Drop the subscription or call
    /// [`unsubscribe`](Self::unsubscribe) to stop receiving events.
    #[instrument(skip(self))]
    pub async fn subscribe(&self) -> Result<Subscription<CatalogEvent>, CatalogError> {
        debug!("Sending request");
        request(&self.sender, |respond_to| CatalogRequest::Subscribe { respond_to })
            .await
            .map_err(CatalogError::from)
    }
}

client_method!(CatalogClient => fn start() -> () as CatalogRequest::Start, Error = CatalogError);
client_method!(CatalogClient => fn snapshot() -> Vec<Product> as CatalogRequest::Snapshot, Error = CatalogError);
client_method!(CatalogClient => fn product(index: usize) -> Option<Product> as CatalogRequest::GetProduct, Error = CatalogError);
client_method!(CatalogClient => fn total_price() -> f64 as CatalogRequest::TotalPrice, Error = CatalogError);
client_method!(CatalogClient => fn phase() -> CatalogPhase as CatalogRequest::Phase, Error = CatalogError);
client_method!(CatalogClient => fn unsubscribe(id: ListenerId) -> bool as CatalogRequest::Unsubscribe, Error = CatalogError);
