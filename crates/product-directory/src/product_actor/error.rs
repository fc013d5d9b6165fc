//! Error types for the Product actor.

use crate::events::PublishError;
use crate::model::ProductId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// Callers branch on the variant: `NotFound` is distinct from store and
/// publisher faults.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product exists with this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Removing `requested` units would take the stock below zero.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: i64 },

    /// A negative quantity given to create or update while the stock floor is enforced.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Adding `delta` to `quantity` does not fit in the stock count.
    #[error("Stock overflow: {quantity} + {delta}")]
    StockOverflow { quantity: i64, delta: i64 },

    /// The store could not be reached or failed to answer.
    #[error("Product store error: {0}")]
    Store(String),

    /// The store write succeeded but the event could not be published.
    #[error("Event publish failed: {0}")]
    Publish(#[from] PublishError),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(raw) => match raw.parse::<ProductId>() {
                Ok(id) => ProductError::NotFound(id),
                Err(_) => ProductError::Store(format!("Item not found: {raw}")),
            },
            other => other
                .into_entity_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::Store(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_keeps_the_id() {
        let err = ProductError::from(FrameworkError::NotFound("product_4".into()));
        assert_eq!(err, ProductError::NotFound(ProductId(4)));
    }

    #[test]
    fn test_entity_errors_are_unwrapped() {
        let inner = ProductError::InsufficientStock {
            requested: 5,
            available: 2,
        };
        let err = ProductError::from(FrameworkError::EntityError(Box::new(inner.clone())));
        assert_eq!(err, inner);
    }

    #[test]
    fn test_channel_failures_become_store_errors() {
        assert!(matches!(
            ProductError::from(FrameworkError::ActorClosed),
            ProductError::Store(msg) if msg == "Actor closed"
        ));
    }
}
