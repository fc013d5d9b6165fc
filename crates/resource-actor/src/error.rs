//! # Store Errors
//!
//! Errors raised by the store itself, as opposed to errors an entity hook
//! returns. Hook errors are carried through unchanged inside
//! [`FrameworkError::EntityError`] so the caller can downcast them back.

/// Errors that can occur while talking to a [`ResourceActor`](crate::ResourceActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Id space exhausted")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`EntityError`](Self::EntityError).
    ///
    /// Returns `Err(self)` when the error is not an entity error or was raised
    /// by a different entity type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
