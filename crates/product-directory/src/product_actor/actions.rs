//! Custom actions for the Product actor.
//!
//! Operations that must read and write a product in one step run as actions
//! inside the store actor, so no other request can interleave between the
//! read and the write. See [`impl ActorEntity for Product`](crate::model::Product#impl-ActorEntity-for-Product).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Adds a signed delta to the stock count.
    ///
    /// # Errors
    /// Fails with [`InsufficientStock`](super::ProductError::InsufficientStock)
    /// when the result would be negative and the store enforces a stock floor.
    AdjustInventory(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The product as stored after the adjustment.
    AdjustInventory(crate::model::Product),
}
