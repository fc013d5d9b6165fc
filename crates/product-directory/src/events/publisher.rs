use super::DomainEvent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Why a publisher refused an event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PublishError {
    /// The transport rejected the event.
    #[error("Event transport failed: {0}")]
    Transport(String),
}

/// Sink for domain events.
///
/// `publish` returns once the transport has accepted the event. It does not
/// wait for, or report, delivery to subscribers.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError>;
}

#[async_trait]
impl<P> EventPublisher for Arc<P>
where
    P: EventPublisher + ?Sized,
{
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        (**self).publish(event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{RecordingPublisher, Topic};
    use crate::model::{Product, ProductId};

    async fn publish_via<P: EventPublisher>(publisher: &P, event: DomainEvent) -> Result<(), PublishError> {
        publisher.publish(event).await
    }

    #[tokio::test]
    async fn test_shared_trait_object_forwards_to_inner() {
        let recorder = RecordingPublisher::new();
        let shared: Arc<dyn EventPublisher> = Arc::new(recorder.clone());
        let mug = Product::new(ProductId(2), "Mug", 0);

        publish_via(&shared, DomainEvent::product_deleted(&mug))
            .await
            .unwrap();
        assert_eq!(recorder.topics(), vec![Topic::ProductDeleted]);

        let failing: Arc<dyn EventPublisher> = Arc::new(RecordingPublisher::failing("offline"));
        assert_eq!(
            publish_via(&failing, DomainEvent::product_deleted(&mug)).await,
            Err(PublishError::Transport("offline".into()))
        );
    }
}
