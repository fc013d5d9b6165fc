//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by a [`ResourceActor`](crate::ResourceActor).
//! Associated types pin down the id, the create/update DTOs, the custom
//! actions and the error type, so a payload meant for one resource can never
//! reach another resource's store.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! Override them only when creation or removal needs validation or side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any stored record must implement.
///
/// # Async & Context
/// Hooks are `async` so they may call other actors. Each hook receives the
/// `Context` passed to [`ResourceActor::run`](crate::ResourceActor::run),
/// which is how policies and dependencies reach the entity.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Ordered so that listing is deterministic,
    /// and built from the store's sequential `u32` counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// A partial update applied to an existing record.
    type Update: Send + Sync + Debug;

    /// Entity-specific mutations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime context injected into every hook. Use `()` if none is needed.
    type Context: Send + Sync;

    /// The entity's error type, returned to callers inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the record from its assigned id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the record is stored. An error
    /// aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update. On error the stored record is left as it was.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed. An error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom action. On error the stored record is left as it was.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
