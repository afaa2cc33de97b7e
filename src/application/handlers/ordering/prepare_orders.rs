//! PrepareOrdersHandler - Command handler that hands orders to workers.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{
    CommandMetadata, DomainError, EventId, OrderId, SerializableDomainEvent, Timestamp,
};
use crate::domain::ordering::{Command, OrderCommand, OrderError, OrderPrepared, WorkerRole};
use crate::ports::EventPublisher;

/// Command to prepare a batch of placed orders.
#[derive(Debug, Clone)]
pub struct PrepareOrdersCommand {
    pub orders: Vec<OrderCommand>,
}

/// Result of preparing a batch.
#[derive(Debug, Clone, Default)]
pub struct PrepareOrdersResult {
    /// Rendered "[Worker]: Preparing ..." lines, in order.
    pub lines: Vec<String>,
    pub events: Vec<OrderPrepared>,
    /// Prepared orders whose event could not be published or handled.
    pub failures: Vec<PublishFailure>,
}

impl PrepareOrdersResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A prepared order whose `order.prepared.v1` delivery failed.
#[derive(Debug, Clone)]
pub struct PublishFailure {
    pub order_id: OrderId,
    pub error: DomainError,
}

/// Handler for preparing orders.
///
/// Beverages go to the barista and food to the baker. Orders are prepared
/// and published in the order given. A failed publish is recorded in the
/// result and does not stop the rest of the batch.
pub struct PrepareOrdersHandler {
    event_publisher: Arc<dyn EventPublisher>,
}

impl PrepareOrdersHandler {
    pub fn new(event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self { event_publisher }
    }

    pub async fn handle(
        &self,
        cmd: PrepareOrdersCommand,
        metadata: CommandMetadata,
    ) -> Result<PrepareOrdersResult, OrderError> {
        let metadata = metadata.ensure_correlation_id();
        let mut result = PrepareOrdersResult::default();

        for order in &cmd.orders {
            let worker = WorkerRole::for_category(order.item_type());
            let ticket = worker.prepare(order.item());
            result.lines.push(ticket.execute());

            let event = OrderPrepared {
                event_id: EventId::new(),
                order_id: order.order_id(),
                customer_id: order.customer().id(),
                worker,
                item_type: ticket.item_type(),
                description: ticket.description(),
                prepared_at: Timestamp::now(),
            };

            let envelope = event.to_envelope()?.with_command_metadata(&metadata);
            match self.event_publisher.publish(envelope).await {
                Ok(()) => {
                    debug!(order_id = %order.order_id(), worker = %worker, "order prepared");
                }
                Err(error) => {
                    warn!(
                        order_id = %order.order_id(),
                        error = %error,
                        "prepared order not delivered"
                    );
                    result.failures.push(PublishFailure {
                        order_id: order.order_id(),
                        error,
                    });
                }
            }
            result.events.push(event);
        }

        Ok(result)
    }
}
