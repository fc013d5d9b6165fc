//! # System Lifecycle
//!
//! [`CatalogSystem`] starts the product store actor, creates the event
//! publisher and hands both to a [`ProductDirectory`](crate::directory::ProductDirectory).
//!
//! ## Dependency Injection
//!
//! The store's stock policy reaches the actor through `run(context)`; the
//! store client and publisher reach the directory through its constructor.
//! Nothing is process-global, so tests build the same graph with doubles:
//!
//! ```rust,ignore
//! let (actor, client) = product_actor::new(config.store_buffer);
//! tokio::spawn(actor.run(config.inventory_policy()));
//! let directory = ProductDirectory::new(client, RecordingPublisher::new());
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the clients** - closes the store's request channel
//! 2. **Actor drains** - `receiver.recv()` returns `None` after the last queued request
//! 3. **Await completion** - a panicked actor task is reported as [`SystemError`]

pub mod catalog_system;

pub use catalog_system::*;
