/// Represents a product in the catalog.
///
/// # Store
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be held by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

/// Store-assigned product identifier, rendered as `product_<n>`.
///
/// Serializes as that same string, so a serialized [`Product`] and an event
/// payload carry the id in one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ProductId {
    type Error = ParseProductIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error returned when parsing a string that is not a `product_<n>` id.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid product id: {0:?}")]
pub struct ParseProductIdError(String);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("product_")
            .and_then(|n| n.parse().ok())
            .map(ProductId)
            .ok_or_else(|| ParseProductIdError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units in stock. Signed so that a store configured to allow negative
    /// stock can represent a backorder.
    pub quantity: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Partial update: fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

impl ProductUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}
