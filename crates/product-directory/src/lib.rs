//! # Product Directory
//!
//! A product catalog service layer: create, update, delete, read, list and
//! stock adjustment over [`Product`](model::Product) records, with a domain
//! event published after every successful mutation.
//!
//! ## Module Tour
//!
//! - **[`model`]**: [`Product`](model::Product), its id and DTOs.
//! - **[`product_actor`]**: the store actor factory, stock policy, actions and [`ProductError`](product_actor::ProductError).
//! - **[`clients`]**: [`ProductClient`](clients::ProductClient), the typed handle to the store.
//! - **[`events`]**: [`DomainEvent`](events::DomainEvent), [`EventPublisher`](events::EventPublisher) and its implementations.
//! - **[`directory`]**: [`ProductDirectory`](directory::ProductDirectory), the façade callers use.
//! - **[`config`]**: [`CatalogConfig`](config::CatalogConfig), loaded from the environment.
//! - **[`lifecycle`]**: [`CatalogSystem`](lifecycle::CatalogSystem), which wires it all and shuts it down.

pub mod clients;
pub mod config;
pub mod directory;
pub mod events;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
