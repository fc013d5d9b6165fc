//! # Domain Events
//!
//! Every successful mutation in the [`ProductDirectory`](crate::directory::ProductDirectory)
//! produces one [`DomainEvent`], handed to an [`EventPublisher`] after the store
//! write has completed.
//!
//! | Topic | Payload |
//! |-------|---------|
//! | `product.created` | `productId`, `name`, `quantity` |
//! | `product.updated` | `productId`, `name`, `quantity` |
//! | `product.deleted` | `productId` |
//! | `inventory.updated` | `productId`, `quantity` |
//!
//! Publishing is fire-and-forget: a publisher reports whether it accepted the
//! event, never whether a subscriber received it.

pub mod broadcast;
pub mod event;
pub mod publisher;
pub mod recording;

pub use broadcast::*;
pub use event::*;
pub use publisher::*;
pub use recording::RecordingPublisher;
