//! EventSubscriber port - Interface for subscribing to domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// # Example
///
/// ```ignore
/// struct ReceiptPrinter;
///
/// #[async_trait]
/// impl EventHandler for ReceiptPrinter {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let placed: OrderPlaced = event.payload_as()?;
///         println!("{} ... {:.2}", placed.description, placed.price);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "ReceiptPrinter"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// ```ignore
/// subscriber.subscribe(ORDER_PREPARED, customer_notifier);
/// subscriber.subscribe_all(&[ORDER_PLACED, ORDER_PREPARED], audit_log);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
