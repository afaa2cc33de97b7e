//! PlaceOrderHandler - Command handler for taking a customer's order.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp};
use crate::domain::menu::{MenuComponent, MenuItem};
use crate::domain::notification::Customer;
use crate::domain::ordering::{Command, OrderCommand, OrderError, OrderPlaced};
use crate::ports::EventPublisher;

/// Command to place one order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub customer: Arc<Customer>,
    pub item: MenuItem,
}

/// Result of a placed order.
#[derive(Debug, Clone)]
pub struct PlaceOrderResult {
    /// The order, ready to be handed to a worker.
    pub order: OrderCommand,
    /// Rendered "Orders a ..." line.
    pub line: String,
    pub event: OrderPlaced,
}

/// Handler for placing orders.
pub struct PlaceOrderHandler {
    event_publisher: Arc<dyn EventPublisher>,
}

impl PlaceOrderHandler {
    pub fn new(event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self { event_publisher }
    }

    pub async fn handle(
        &self,
        cmd: PlaceOrderCommand,
        metadata: CommandMetadata,
    ) -> Result<PlaceOrderResult, OrderError> {
        // 1. Take the order
        let order = OrderCommand::new(cmd.customer, cmd.item);
        let line = order.execute();

        // 2. Publish event
        let event = OrderPlaced {
            event_id: EventId::new(),
            order_id: order.order_id(),
            customer_id: order.customer().id(),
            customer_name: order.customer().name().to_string(),
            item_type: order.item_type(),
            description: order.description(),
            price: order.item().price(),
            placed_at: Timestamp::now(),
        };

        let envelope = event.to_envelope()?.with_command_metadata(&metadata);
        self.event_publisher.publish(envelope).await?;

        Ok(PlaceOrderResult { order, line, event })
    }
}
