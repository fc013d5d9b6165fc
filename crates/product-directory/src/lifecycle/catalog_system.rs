use crate::config::{CatalogConfig, ConfigError};
use crate::directory::ProductDirectory;
use crate::events::{BroadcastPublisher, DomainEvent};
use crate::product_actor;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running catalog: the product store actor, the event publisher and the
/// directory wired to both.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(CatalogConfig::load()?)?;
/// let mut events = system.subscribe();
///
/// let lamp = system.directory.create(params).await?;
/// let created = events.recv().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// The service façade. Clones share the same store and publisher.
    pub directory: ProductDirectory<BroadcastPublisher>,

    publisher: BroadcastPublisher,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the product store with the configured stock policy and wires
    /// the directory to it. Must be called inside a Tokio runtime.
    ///
    /// The config is validated first; nothing is spawned if it is rejected.
    pub fn new(config: CatalogConfig) -> Result<Self, SystemError> {
        config.validate()?;

        let (product_actor, product_client) = product_actor::new(config.store_buffer);
        let product_handle = tokio::spawn(product_actor.run(config.inventory_policy()));

        let publisher = BroadcastPublisher::new(config.event_capacity);
        let directory = ProductDirectory::new(product_client, publisher.clone());

        info!(?config, "Catalog system started");
        Ok(Self {
            directory,
            publisher,
            handles: vec![product_handle],
        })
    }

    /// Receives every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.publisher.subscribe()
    }

    /// Stops the store and waits for it to finish.
    ///
    /// The store exits once its channel closes, so any clones of
    /// [`directory`](Self::directory) must be dropped first or this waits for them.
    /// Subscribers see the channel close once the last publisher clone is gone.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog...");
        drop(self.directory);
        drop(self.publisher);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
