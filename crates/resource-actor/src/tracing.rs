//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Store actors log
//! with an `entity_type` field instead of a module path, so the subscriber
//! hides targets and uses the compact format, which prints span names inline
//! (e.g. `adjust_inventory: Action ok`).
//!
//! ## Usage
//!
//! ```bash
//! # Request outcomes only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every store request
//! RUST_LOG=debug cargo run
//!
//! # Store internals only
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a stock adjustment reads:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO create: Created entity_type="Product" id=product_1 size=1
//! INFO create: Published topic="product.created" product_id=product_1
//! INFO adjust_inventory: Action ok entity_type="Product" id=product_1
//! INFO adjust_inventory: Published topic="inventory.updated" product_id=product_1
//! ```

/// Initializes the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`. A second call panics because the
/// global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
