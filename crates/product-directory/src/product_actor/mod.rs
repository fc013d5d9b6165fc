//! # Product Actor
//!
//! The store for [`Product`] records: a [`ResourceActor`] plus the stock
//! policy it runs with.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type shared by the store, client and directory
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock adjustment
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_directory::model::ProductCreate;
//! use product_directory::product_actor::{self, InventoryPolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(InventoryPolicy::default()));
//!
//!     let product = client
//!         .create_product(ProductCreate { name: "Widget".to_string(), quantity: 10 })
//!         .await?;
//!     let adjusted = client.adjust_inventory(product.id, -4).await?;
//!     assert_eq!(adjusted.quantity, 6);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Stock policy injected into the actor as its context.
///
/// With the default policy no product may hold a negative quantity: creates,
/// updates and adjustments that would go below zero are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryPolicy {
    pub allow_negative_stock: bool,
}

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
