use std::sync::Arc;

use tracing::{error, info};

use crate::app_system::StoreConfig;
use crate::catalog_actor::CatalogViewModel;
use crate::clients::CatalogClient;
use crate::fetcher::ProductCatalogFetcher;

/// One running storefront session.
///
/// Responsible for starting the view-model actor, handing out its client,
/// and waiting for it on shutdown.
pub struct StoreSystem {
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StoreSystem {
    pub fn new(config: &StoreConfig, fetcher: Arc<dyn ProductCatalogFetcher>) -> Self {
        info!(mailbox_size = config.mailbox_size, "Starting store system");
        let (view_model, catalog_client) = CatalogViewModel::new(config.mailbox_size, fetcher);
        let handle = tokio::spawn(view_model.run());

        Self {
            catalog_client,
            handle,
        }
    }

    /// Closes the session. Clones of the client held elsewhere keep the
    /// actor alive, as does a fetch that is still in flight.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::CatalogEvent;
    use crate::domain::Product;
    use crate::mock_framework::StaticFetcher;

    #[tokio::test]
    async fn test_system_runs_session_and_shuts_down() {
        let config = StoreConfig::default();
        let fetcher = Arc::new(StaticFetcher::products(vec![Product::new(1, "A", 2.0, 1)]));
        let system = StoreSystem::new(&config, fetcher);

        let mut events = system.catalog_client.subscribe().await.unwrap();
        system.catalog_client.start().await.unwrap();
        assert!(matches!(events.recv().await, Some(CatalogEvent::CatalogReady(_))));

        assert!(system.catalog_client.increment(0).await.unwrap());
        assert_eq!(system.catalog_client.total_price().await.unwrap(), 2.0);

        assert_eq!(system.shutdown().await, Ok(()));
        assert_eq!(events.recv().await, Some(CatalogEvent::AmountChanged));
        assert_eq!(events.recv().await, None);
    }
}
