use crate::model::Product;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt::Display;

/// Category tag subscribers filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "product.created")]
    ProductCreated,
    #[serde(rename = "product.updated")]
    ProductUpdated,
    #[serde(rename = "product.deleted")]
    ProductDeleted,
    #[serde(rename = "inventory.updated")]
    InventoryUpdated,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::ProductCreated => "product.created",
            Topic::ProductUpdated => "product.updated",
            Topic::ProductDeleted => "product.deleted",
            Topic::InventoryUpdated => "inventory.updated",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A topic plus its field map, built from the product as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    topic: Topic,
    payload: Map<String, Value>,
}

impl DomainEvent {
    pub fn product_created(product: &Product) -> Self {
        Self {
            topic: Topic::ProductCreated,
            payload: fields([
                ("productId", json!(product.id)),
                ("name", json!(product.name)),
                ("quantity", json!(product.quantity)),
            ]),
        }
    }

    pub fn product_updated(product: &Product) -> Self {
        Self {
            topic: Topic::ProductUpdated,
            payload: fields([
                ("productId", json!(product.id)),
                ("name", json!(product.name)),
                ("quantity", json!(product.quantity)),
            ]),
        }
    }

    pub fn product_deleted(product: &Product) -> Self {
        Self {
            topic: Topic::ProductDeleted,
            payload: fields([("productId", json!(product.id))]),
        }
    }

    pub fn inventory_updated(product: &Product) -> Self {
        Self {
            topic: Topic::InventoryUpdated,
            payload: fields([
                ("productId", json!(product.id)),
                ("quantity", json!(product.quantity)),
            ]),
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// The `productId` field, present on every product topic.
    pub fn product_id(&self) -> Option<&str> {
        self.payload.get("productId").and_then(Value::as_str)
    }
}

fn fields<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
