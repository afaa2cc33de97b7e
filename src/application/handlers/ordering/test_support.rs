//! Test doubles shared by the ordering handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

/// Publisher whose every publish fails.
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        Err(DomainError::new(
            ErrorCode::EventPublishFailed,
            "bus unavailable",
        ))
    }

    async fn publish_all(&self, _events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        Err(DomainError::new(
            ErrorCode::EventPublishFailed,
            "bus unavailable",
        ))
    }
}
