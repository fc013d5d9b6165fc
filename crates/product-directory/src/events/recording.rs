//! Publisher test double.

use super::{DomainEvent, EventPublisher, PublishError, Topic};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Keeps every published event in memory, or refuses them all when built
/// with [`RecordingPublisher::failing`].
///
/// Clones share the same log, so a test can hand one clone to the code under
/// test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
    failure: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose transport rejects every event with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Events accepted so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.events().iter().map(DomainEvent::topic).collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        if let Some(reason) = &self.failure {
            return Err(PublishError::Transport(reason.clone()));
        }
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
