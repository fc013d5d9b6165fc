//! ActorEntity trait implementation for the Product domain type.
//!
//! The entity enforces the stock policy handed to the actor as its context:
//! unless negative stock is allowed, no create, update or adjustment may
//! leave a product with a quantity below zero.

use super::actions::{ProductAction, ProductActionResult};
use super::{InventoryPolicy, ProductError};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

impl InventoryPolicy {
    fn check(&self, quantity: i64) -> Result<(), ProductError> {
        if quantity < 0 && !self.allow_negative_stock {
            return Err(ProductError::InvalidQuantity(quantity));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = InventoryPolicy;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.quantity))
    }

    async fn on_create(&mut self, policy: &InventoryPolicy) -> Result<(), Self::Error> {
        policy.check(self.quantity)
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `quantity`: Stock count, subject to the stock floor
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        policy: &InventoryPolicy,
    ) -> Result<(), Self::Error> {
        if let Some(quantity) = update.quantity {
            policy.check(quantity)?;
            self.quantity = quantity;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        policy: &InventoryPolicy,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::AdjustInventory(delta) => {
                let quantity = self
                    .quantity
                    .checked_add(delta)
                    .ok_or(ProductError::StockOverflow {
                        quantity: self.quantity,
                        delta,
                    })?;
                if quantity < 0 && !policy.allow_negative_stock {
                    return Err(ProductError::InsufficientStock {
                        requested: delta.unsigned_abs(),
                        available: self.quantity,
                    });
                }
                self.quantity = quantity;
                Ok(ProductActionResult::AdjustInventory(self.clone()))
            }
        }
    }
}
