//! NotifyCustomersHandler - Command handler for the "orders ready" broadcast.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp};
use crate::domain::notification::OrderSystem;
use crate::domain::ordering::{OrderError, OrdersReady};
use crate::ports::EventPublisher;

/// Command to tell every attached customer that orders are ready.
#[derive(Debug, Clone)]
pub struct NotifyCustomersCommand {
    pub message: String,
}

/// Result of the broadcast.
#[derive(Debug, Clone)]
pub struct NotifyCustomersResult {
    /// The shop-wide announcement line.
    pub announcement: String,
    /// How many customers received `message`.
    pub recipients: usize,
    pub event: OrdersReady,
}

/// Handler for notifying customers.
pub struct NotifyCustomersHandler {
    order_system: Arc<OrderSystem>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl NotifyCustomersHandler {
    pub fn new(order_system: Arc<OrderSystem>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            order_system,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: NotifyCustomersCommand,
        metadata: CommandMetadata,
    ) -> Result<NotifyCustomersResult, OrderError> {
        if cmd.message.trim().is_empty() {
            return Err(OrderError::validation("message", "must not be empty"));
        }

        // 1. Broadcast
        let recipients = self.order_system.notify(&cmd.message);
        let announcement = self.order_system.notify_all_ready();

        // 2. Publish event
        let event = OrdersReady {
            event_id: EventId::new(),
            message: cmd.message,
            recipients,
            announced_at: Timestamp::now(),
        };

        let envelope = event.to_envelope()?.with_command_metadata(&metadata);
        self.event_publisher.publish(envelope).await?;

        Ok(NotifyCustomersResult {
            announcement,
            recipients,
            event,
        })
    }
}
