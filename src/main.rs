use std::sync::Arc;

use tracing::{error, info, warn, Instrument};

use store_cart::actor_framework::Subscription;
use store_cart::app_system::{setup_tracing, StoreConfig, StoreSystem};
use store_cart::cart::CartAction;
use store_cart::catalog_actor::CatalogEvent;
use store_cart::clients::CatalogClient;
use store_cart::domain::Product;
use store_cart::error::CatalogError;
use store_cart::fetcher::HttpCatalogFetcher;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    info!(catalog_url = %config.catalog_url, "Starting storefront session");

    let fetcher = HttpCatalogFetcher::new(config.catalog_url.clone(), config.request_timeout)
        .map_err(|e| e.to_string())?;
    let system = StoreSystem::new(&config, Arc::new(fetcher));
    let client = system.catalog_client.clone();

    let mut events = client.subscribe().await.map_err(|e| e.to_string())?;
    client.start().await.map_err(|e| e.to_string())?;

    match events.recv().await {
        Some(CatalogEvent::CatalogReady(products)) => {
            for (index, product) in products.iter().enumerate() {
                render_row(index, product);
            }

            let span = tracing::info_span!("cart_gestures");
            simulate_gestures(&client, &mut events, &products)
                .instrument(span)
                .await
                .map_err(|e| e.to_string())?;
        }
        Some(CatalogEvent::Error(message)) => error!(error = %message, "Could not load catalog"),
        Some(CatalogEvent::AmountChanged) => warn!("Amount changed before catalog arrived"),
        None => warn!("Session closed before catalog arrived"),
    }

    drop(client);
    system.shutdown().await?;

    info!("Storefront session completed");
    Ok(())
}

fn render_row(index: usize, product: &Product) {
    info!(
        index,
        id = product.id,
        title = %product.title,
        price = product.price,
        stock = product.stock,
        selected = product.selected(),
        "Product"
    );
}

/// Plays the gestures a shopper would make on the first row: two adds and
/// one removal. The row and the total are re-rendered when the view-model
/// reports the change.
async fn simulate_gestures(
    client: &CatalogClient,
    events: &mut Subscription<CatalogEvent>,
    products: &[Product],
) -> Result<(), CatalogError> {
    if products.is_empty() {
        info!("Catalog is empty");
        return Ok(());
    }

    for action in [CartAction::Increment, CartAction::Increment, CartAction::Decrement] {
        let changed = match action {
            CartAction::Increment => client.increment(0).await?,
            CartAction::Decrement => client.decrement(0).await?,
        };
        if !changed {
            info!(?action, "Gesture ignored");
            continue;
        }
        if events.recv().await != Some(CatalogEvent::AmountChanged) {
            warn!("Expected an amount change notification");
            continue;
        }
        if let Some(product) = client.product(0).await? {
            render_row(0, &product);
        }
        let total = client.total_price().await?;
        info!("Total price: {} $", total);
    }
    Ok(())
}
