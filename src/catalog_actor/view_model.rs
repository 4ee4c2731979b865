use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};

use crate::actor_framework::{ListenerId, Listeners, Response, Subscription};
use crate::cart::{CartAction, CartState};
use crate::clients::CatalogClient;
use crate::domain::{Product, ProductCatalogResponse};
use crate::error::FetchError;
use crate::fetcher::ProductCatalogFetcher;
use super::events::{CatalogEvent, CatalogPhase};
use super::messages::CatalogRequest;

/// Actor owning one storefront session.
///
/// Every snapshot mutation and every notification happens inside
/// [`run`](Self::run). The fetch runs in its own task and only posts its
/// result back through the mailbox, so the snapshot has a single writer.
pub struct CatalogViewModel {
    receiver: mpsc::Receiver<CatalogRequest>,
    mailbox: mpsc::WeakSender<CatalogRequest>,
    fetcher: Arc<dyn ProductCatalogFetcher>,
    cart: CartState,
    listeners: Listeners<CatalogEvent>,
    phase: CatalogPhase,
}

impl CatalogViewModel {
    pub fn new(buffer_size: usize, fetcher: Arc<dyn ProductCatalogFetcher>) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            mailbox: sender.downgrade(),
            fetcher,
            cart: CartState::default(),
            listeners: Listeners::new(),
            phase: CatalogPhase::Idle,
        };
        (actor, CatalogClient::new(sender))
    }

    /// Processes requests until every client is dropped and no fetch is in
    /// flight.
    #[instrument(name = "catalog_view_model", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogViewModel starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Start { respond_to } => {
                    self.handle_start(respond_to);
                }
                CatalogRequest::Apply { index, action, respond_to } => {
                    self.handle_apply(index, action, respond_to);
                }
                CatalogRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.cart.products().to_vec());
                }
                CatalogRequest::GetProduct { index, respond_to } => {
                    let _ = respond_to.send(self.cart.product(index).cloned());
                }
                CatalogRequest::TotalPrice { respond_to } => {
                    let _ = respond_to.send(self.cart.total_price());
                }
                CatalogRequest::Phase { respond_to } => {
                    let _ = respond_to.send(self.phase);
                }
                CatalogRequest::Subscribe { respond_to } => {
                    self.handle_subscribe(respond_to);
                }
                CatalogRequest::Unsubscribe { id, respond_to } => {
                    self.handle_unsubscribe(id, respond_to);
                }
                CatalogRequest::FetchCompleted { result } => {
                    self.handle_fetch_completed(result);
                }
            }
        }
        info!("CatalogViewModel stopped");
    }

    /// Issues the session's only catalog fetch.
    ///
    /// The fetch task holds a strong mailbox sender for as long as it runs,
    /// so its completion is always delivered to a live actor.
    #[instrument(fields(phase = ?self.phase), skip(self, respond_to))]
    fn handle_start(&mut self, respond_to: Response<()>) {
        if self.phase != CatalogPhase::Idle {
            debug!("Catalog fetch already issued");
            let _ = respond_to.send(());
            return;
        }

        let Some(mailbox) = self.mailbox.upgrade() else {
            warn!("Session closed before start");
            let _ = respond_to.send(());
            return;
        };

        info!("Fetching catalog");
        self.phase = CatalogPhase::Loading;
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(
            async move {
                let result = fetcher.fetch().await;
                if mailbox.send(CatalogRequest::FetchCompleted { result }).await.is_err() {
                    debug!("Session closed before fetch completed");
                }
            }
            .instrument(info_span!("catalog_fetch")),
        );
        let _ = respond_to.send(());
    }

    #[instrument(skip(self, result))]
    fn handle_fetch_completed(&mut self, result: Result<ProductCatalogResponse, FetchError>) {
        match result {
            Ok(response) => {
                self.cart.replace(response.products);
                self.phase = CatalogPhase::Ready;
                info!(products = self.cart.len(), "Catalog ready");
                let products: Vec<Product> = self.cart.products().to_vec();
                self.notify(CatalogEvent::CatalogReady(products));
            }
            Err(e) => {
                error!(error = %e, "Catalog fetch failed");
                self.phase = CatalogPhase::Failed;
                self.notify(CatalogEvent::Error(e.to_string()));
            }
        }
    }

    #[instrument(skip(self, respond_to))]
    fn handle_apply(&mut self, index: usize, action: CartAction, respond_to: Response<bool>) {
        let changed = self.cart.apply(index, action);
        if changed {
            debug!(
                selected = self.cart.selected_amount(index).unwrap_or(0),
                total = self.cart.total_price(),
                "Amount changed"
            );
            self.notify(CatalogEvent::AmountChanged);
        }
        let _ = respond_to.send(changed);
    }

    fn handle_subscribe(&mut self, respond_to: Response<Subscription<CatalogEvent>>) {
        let subscription = self.listeners.subscribe();
        debug!(listener = ?subscription.id(), "Listener subscribed");
        let _ = respond_to.send(subscription);
    }

    fn handle_unsubscribe(&mut self, id: ListenerId, respond_to: Response<bool>) {
        let removed = self.listeners.unsubscribe(id);
        debug!(listener = ?id, removed, "Listener unsubscribed");
        let _ = respond_to.send(removed);
    }

    fn notify(&mut self, event: CatalogEvent) {
        let delivered = self.listeners.emit(&event);
        debug!(delivered, "Event published");
    }
}
