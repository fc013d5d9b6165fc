use super::{DomainEvent, EventPublisher, PublishError};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// In-process fan-out publisher.
///
/// Every subscriber gets its own copy of each event published after it
/// subscribed. A subscriber that falls more than `capacity` events behind
/// loses the oldest ones and sees `RecvError::Lagged`. Publishing with no
/// subscribers succeeds; the event is dropped.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<DomainEvent>,
}

impl BroadcastPublisher {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        let topic = event.topic();
        match self.sender.send(event) {
            Ok(receivers) => debug!(%topic, receivers, "Broadcast"),
            Err(_) => trace!(%topic, "No subscribers"),
        }
        Ok(())
    }
}
