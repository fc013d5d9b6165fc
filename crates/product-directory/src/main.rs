//! Walks a product through its lifecycle against a live catalog, logging
//! every published event.
//!
//! ```bash
//! RUST_LOG=info cargo run -p product-directory
//! CATALOG_ALLOW_NEGATIVE_STOCK=true RUST_LOG=debug cargo run -p product-directory
//! ```

use product_directory::config::CatalogConfig;
use product_directory::lifecycle::CatalogSystem;
use product_directory::model::{ProductCreate, ProductUpdate};
use product_directory::product_actor::ProductError;
use resource_actor::tracing::setup_tracing;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CatalogConfig::load()?;
    let system = CatalogSystem::new(config)?;

    let mut events = system.subscribe();
    let listener = tokio::spawn(
        async move {
            loop {
                match events.recv().await {
                    Ok(event) => info!(topic = %event.topic(), payload = ?event.payload(), "Event"),
                    Err(RecvError::Lagged(missed)) => warn!(missed, "Subscriber lagged"),
                    Err(RecvError::Closed) => break,
                }
            }
        }
        .instrument(tracing::info_span!("subscriber")),
    );

    let directory = &system.directory;

    let lamp = directory
        .create(ProductCreate {
            name: "Desk Lamp".to_string(),
            quantity: 10,
        })
        .await?;
    info!(id = %lamp.id, "Product created");

    directory
        .update(lamp.id, ProductUpdate::name("Adjustable Desk Lamp"))
        .await?;

    let restocked = directory.adjust_inventory(lamp.id, 3).await?;
    info!(id = %lamp.id, quantity = restocked.quantity, "Restocked");

    match directory.adjust_inventory(lamp.id, -100).await {
        Ok(product) => info!(quantity = product.quantity, "Backordered"),
        Err(ProductError::InsufficientStock { requested, available }) => {
            warn!(requested, available, "Sale refused")
        }
        Err(e) => return Err(e.into()),
    }

    let catalog = directory.list_all().await?;
    info!(count = catalog.len(), "Catalog listed");

    let removed = directory.delete(lamp.id).await?;
    info!(id = %removed.id, name = %removed.name, "Product deleted");

    if let Err(ProductError::NotFound(id)) = directory.get_by_id(lamp.id).await {
        info!(%id, "Lookup after delete reports not found");
    }

    system.shutdown().await?;
    listener.await?;

    info!("Demo completed successfully");
    Ok(())
}
