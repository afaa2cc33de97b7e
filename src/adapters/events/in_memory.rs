//! In-memory event bus.
//!
//! Delivers events synchronously to subscribed handlers, in subscription
//! order, and keeps every published envelope for inspection. This is the
//! bus the shop binary runs on.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus with event capture.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe(ORDER_PREPARED, Arc::new(CustomerNotifier::new(order_system)));
///
/// bus.publish(envelope).await?;
/// assert!(bus.has_event(ORDER_PREPARED));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(Vec::new()),
        }
    }

    /// Returns all published events, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "publishing event"
        );

        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());

        // Clone handlers to release lock before await points
        let type_handlers: Vec<Arc<dyn EventHandler>> = {
            let handlers = self
                .handlers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            handlers
                .get(&event.event_type)
                .cloned()
                .unwrap_or_default()
        };

        let mut errors = Vec::new();
        for handler in type_handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                warn!(handler = handler.name(), error = %e, "event handler failed");
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EventHandlerFailed,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        debug!(event_type, handler = handler.name(), "handler subscribed");
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        for event_type in event_types {
            self.subscribe(event_type, Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Order", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    #[tokio::test]
    async fn publish_stores_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("order.placed.v1", "order-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("order.placed.v1"));
        assert!(!bus.has_event("order.prepared.v1"));
    }

    #[tokio::test]
    async fn events_of_type_filters_correctly() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("type.a", "1")).await.unwrap();
        bus.publish(test_envelope("type.b", "2")).await.unwrap();
        bus.publish(test_envelope("type.a", "3")).await.unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
    }

    #[tokio::test]
    async fn events_for_aggregate_filters_correctly() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("type.a", "order-1")).await.unwrap();
        bus.publish(test_envelope("type.b", "order-2")).await.unwrap();
        bus.publish(test_envelope("type.c", "order-1")).await.unwrap();

        assert_eq!(bus.events_for_aggregate("order-1").len(), 2);
    }

    #[tokio::test]
    async fn handlers_run_in_subscription_order() {
        let bus = InMemoryEventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        struct Recorder(&'static str, Arc<Mutex<Vec<&'static str>>>);

        #[async_trait]
        impl EventHandler for Recorder {
            async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
                self.1.lock().unwrap().push(self.0);
                Ok(())
            }
            fn name(&self) -> &'static str {
                self.0
            }
        }

        bus.subscribe("test.event", Arc::new(Recorder("first", seen.clone())));
        bus.subscribe("test.event", Arc::new(Recorder("second", seen.clone())));
        bus.publish(test_envelope("test.event", "1")).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn subscribe_all_registers_for_multiple_types() {
        let bus = InMemoryEventBus::new();
        let received = Arc::new(AtomicUsize::new(0));

        bus.subscribe_all(
            &["type.a", "type.b", "type.c"],
            Arc::new(CountingHandler(received.clone())),
        );

        bus.publish(test_envelope("type.a", "1")).await.unwrap();
        bus.publish(test_envelope("type.b", "2")).await.unwrap();
        bus.publish(test_envelope("type.d", "3")).await.unwrap(); // Not subscribed

        assert_eq!(received.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn publish_all_publishes_in_order() {
        let bus = InMemoryEventBus::new();

        bus.publish_all(vec![
            test_envelope("type.a", "1"),
            test_envelope("type.b", "2"),
            test_envelope("type.c", "3"),
        ])
        .await
        .unwrap();

        let types: Vec<_> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["type.a", "type.b", "type.c"]);
    }

    #[tokio::test]
    async fn handler_error_is_propagated_after_other_handlers_run() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        struct FailingHandler;

        #[async_trait]
        impl EventHandler for FailingHandler {
            async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
                Err(DomainError::new(ErrorCode::InternalError, "Handler failed"))
            }
            fn name(&self) -> &'static str {
                "FailingHandler"
            }
        }

        bus.subscribe("test.event", Arc::new(FailingHandler));
        bus.subscribe("test.event", Arc::new(CountingHandler(counter.clone())));
        let result = bus.publish(test_envelope("test.event", "1")).await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::EventHandlerFailed);
        assert!(err.message.contains("FailingHandler"));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_count(), 1);
    }
}
