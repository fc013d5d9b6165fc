//! # Resource Actor
//!
//! An actor-backed, in-memory resource store. Each resource type gets one
//! [`ResourceActor`] running in its own Tokio task; the actor owns every record
//! of that type and processes requests one at a time, so no locks guard the
//! store and a read-modify-write executed inside the actor is atomic.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its DTOs and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop that owns the records
//! 3. **Interface Layer** ([`ResourceClient`]) - a cloneable, type-safe handle
//!
//! ## Store Operations
//!
//! The request set mirrors what a document store offers a service layer:
//!
//! | Client call | Store semantics |
//! |-------------|-----------------|
//! | [`create`](ResourceClient::create) | insert, assigning the id; returns the stored record |
//! | [`get`](ResourceClient::get) | find by id; `None` when absent |
//! | [`update`](ResourceClient::update) | find by id and update; returns the post-update record |
//! | [`delete`](ResourceClient::delete) | find by id and delete; returns the removed record |
//! | [`list`](ResourceClient::list) | find all, ordered by id |
//! | [`perform_action`](ResourceClient::perform_action) | entity-specific mutation |
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     assert_eq!(note.id, 1);
//!
//!     let removed = client.delete(note.id).await.unwrap();
//!     assert_eq!(removed.text, "hello");
//!     assert!(client.list().await.unwrap().is_empty());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies and policies are handed to [`ResourceActor::run`] rather than
//! to the constructor. Every hook receives a reference to that context, so an
//! entity can consult configuration (or other clients) without global state.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient) and raw channel
//! helpers for exercising code that sits in front of a store without spawning
//! a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
