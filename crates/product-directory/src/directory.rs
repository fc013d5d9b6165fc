//! # Product Directory
//!
//! The service façade over the product store. Each operation is one store
//! call followed, on success, by one published event:
//!
//! ```text
//! caller ─▶ ProductDirectory ─▶ ProductClient ─▶ ResourceActor<Product>
//!                  │
//!                  └─▶ EventPublisher::publish(DomainEvent)   (after the store succeeds)
//! ```
//!
//! The store write and the publish are independent effects. If the publish
//! fails, the write has already happened and the caller sees
//! [`ProductError::Publish`]. A failed store call never publishes.

use crate::clients::ProductClient;
use crate::events::{DomainEvent, EventPublisher};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use resource_actor::ActorClient;
use tracing::{info, instrument, warn};

/// Create, update, delete, read and stock operations over [`Product`]s.
///
/// Both collaborators are injected, so tests can swap in
/// [`MockClient`](resource_actor::mock::MockClient)-backed stores and
/// [`RecordingPublisher`](crate::events::RecordingPublisher)s.
#[derive(Clone)]
pub struct ProductDirectory<P> {
    store: ProductClient,
    publisher: P,
}

impl<P: EventPublisher> ProductDirectory<P> {
    pub fn new(store: ProductClient, publisher: P) -> Self {
        Self { store, publisher }
    }

    /// Stores a new product and publishes `product.created`.
    #[instrument(skip(self))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        let product = self.store.create_product(params).await?;
        self.emit(DomainEvent::product_created(&product)).await?;
        Ok(product)
    }

    /// Applies a partial update and publishes `product.updated`.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        let product = self.store.update_product(id, update).await?;
        self.emit(DomainEvent::product_updated(&product)).await?;
        Ok(product)
    }

    /// Removes a product, publishes `product.deleted` and returns the removed record.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, ProductError> {
        let product = self.store.delete(id).await?;
        self.emit(DomainEvent::product_deleted(&product)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        self.store.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    /// Every stored product, in id order. An empty store yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        self.store.list().await
    }

    /// Adds `delta` to the stock count and publishes `inventory.updated`.
    ///
    /// Fails with `NotFound` for an unknown id, and with `InsufficientStock`
    /// when the store enforces a stock floor the adjustment would break.
    /// Neither failure publishes anything.
    #[instrument(skip(self))]
    pub async fn adjust_inventory(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        let product = self.store.adjust_inventory(id, delta).await?;
        self.emit(DomainEvent::inventory_updated(&product)).await?;
        Ok(product)
    }

    async fn emit(&self, event: DomainEvent) -> Result<(), ProductError> {
        let topic = event.topic();
        let product_id = event.product_id().map(str::to_owned);
        match self.publisher.publish(event).await {
            Ok(()) => {
                info!(%topic, ?product_id, "Published");
                Ok(())
            }
            Err(e) => {
                warn!(%topic, ?product_id, error = %e, "Publish failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PublishError, RecordingPublisher, Topic};
    use resource_actor::mock::MockClient;
    use resource_actor::FrameworkError;

    fn directory(
        mock: &MockClient<Product>,
        publisher: &RecordingPublisher,
    ) -> ProductDirectory<RecordingPublisher> {
        ProductDirectory::new(ProductClient::new(mock.client()), publisher.clone())
    }

    fn lamp(quantity: i64) -> Product {
        Product::new(ProductId(1), "Lamp", quantity)
    }

    #[tokio::test]
    async fn test_create_publishes_stored_fields() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create().return_ok(lamp(4));
        let publisher = RecordingPublisher::new();

        let product = directory(&mock, &publisher)
            .create(ProductCreate {
                name: "Lamp".into(),
                quantity: 4,
            })
            .await
            .unwrap();

        assert_eq!(product, lamp(4));
        assert_eq!(publisher.events(), vec![DomainEvent::product_created(&product)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(5)).return_ok(None);
        let publisher = RecordingPublisher::new();

        let result = directory(&mock, &publisher).get_by_id(ProductId(5)).await;
        assert_eq!(result, Err(ProductError::NotFound(ProductId(5))));
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_publishes_nothing() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_delete(ProductId(2))
            .return_err(FrameworkError::NotFound(ProductId(2).to_string()));
        let publisher = RecordingPublisher::new();

        let result = directory(&mock, &publisher).delete(ProductId(2)).await;
        assert_eq!(result, Err(ProductError::NotFound(ProductId(2))));
        assert!(publisher.events().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_fault_propagates_without_event() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update(ProductId(1))
            .return_err(FrameworkError::ActorClosed);
        let publisher = RecordingPublisher::new();

        let result = directory(&mock, &publisher)
            .update(ProductId(1), ProductUpdate::quantity(5))
            .await;
        assert!(matches!(result, Err(ProductError::Store(_))));
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_surfaces_after_write() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(crate::product_actor::ProductActionResult::AdjustInventory(lamp(13)));
        let publisher = RecordingPublisher::failing("broker down");

        let result = directory(&mock, &publisher)
            .adjust_inventory(ProductId(1), 3)
            .await;
        assert_eq!(
            result,
            Err(ProductError::Publish(PublishError::Transport(
                "broker down".into()
            )))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_passes_through() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![lamp(1)]);
        let publisher = RecordingPublisher::new();

        let products = directory(&mock, &publisher).list_all().await.unwrap();
        assert_eq!(products, vec![lamp(1)]);
        assert_eq!(publisher.topics(), Vec::<Topic>::new());
    }
}
