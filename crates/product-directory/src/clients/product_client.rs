//! # Product Client
//!
//! Typed access to the `Product` store. Store failures come back as
//! [`ProductError`], with a missing id reported as `NotFound` and the
//! entity's own errors (stock floor, invalid quantity) passed through.
//! `get`, `delete` and `list` come from [`ActorClient`].
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Adds `delta` to the stock count as one atomic store operation.
    ///
    /// Returns the product as stored after the adjustment.
    #[instrument(skip(self))]
    pub async fn adjust_inventory(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        debug!(%id, delta, "Adjusting inventory");
        match self
            .inner
            .perform_action(id, ProductAction::AdjustInventory(delta))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::AdjustInventory(product) => Ok(product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{
        create_mock_client, expect_action, expect_create, expect_get, expect_update,
    };

    #[tokio::test]
    async fn test_create_product_sends_payload() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate {
                    name: "Kettle".to_string(),
                    quantity: 7,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Kettle");
        assert_eq!(params.quantity, 7);
        responder
            .send(Ok(Product::new(ProductId(1), "Kettle", 7)))
            .unwrap();

        let product = create_task.await.unwrap().unwrap();
        assert_eq!(product.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_get_sends_id_and_passes_absence_through() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let get_task = tokio::spawn(async move { product_client.get(ProductId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, ProductId(4));
        responder.send(Ok(None)).unwrap();

        assert_eq!(get_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            product_client
                .update_product(ProductId(9), ProductUpdate::quantity(5))
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(9));
        assert_eq!(update.quantity, Some(5));
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound(ProductId(9))));
    }

    #[tokio::test]
    async fn test_adjust_inventory_sends_action() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_inventory(ProductId(1), 3).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::AdjustInventory(3));
        responder
            .send(Ok(ProductActionResult::AdjustInventory(Product::new(
                ProductId(1),
                "Kettle",
                13,
            ))))
            .unwrap();

        assert_eq!(adjust_task.await.unwrap().unwrap().quantity, 13);
    }

    #[tokio::test]
    async fn test_adjust_inventory_passes_stock_errors_through() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_inventory(ProductId(1), -50).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    requested: 50,
                    available: 10,
                },
            ))))
            .unwrap();

        assert_eq!(
            adjust_task.await.unwrap(),
            Err(ProductError::InsufficientStock {
                requested: 50,
                available: 10
            })
        );
    }
}
