//! CustomerNotifier - Event handler that tells a customer their item is ready.
//!
//! Subscribed to `order.prepared.v1`. Each prepared order sends
//! "Your {description} is ready" to the customer who ordered it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::notification::OrderSystem;
use crate::domain::ordering::OrderPrepared;
use crate::ports::EventHandler;

/// Forwards prepared orders to the ordering customer.
pub struct CustomerNotifier {
    order_system: Arc<OrderSystem>,
}

impl CustomerNotifier {
    pub fn new(order_system: Arc<OrderSystem>) -> Self {
        Self { order_system }
    }

    /// Message sent for a prepared item.
    pub fn ready_message(description: &str) -> String {
        format!("Your {} is ready", description)
    }
}

#[async_trait]
impl EventHandler for CustomerNotifier {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let prepared: OrderPrepared = event.payload_as()?;
        let customer_id = prepared.customer_id.to_string();
        let message = Self::ready_message(&prepared.description);

        if !self.order_system.notify_one(&customer_id, &message) {
            return Err(DomainError::new(
                ErrorCode::CustomerNotFound,
                format!("No attached customer {}", customer_id),
            )
            .with_detail("order_id", prepared.order_id.to_string()));
        }

        debug!(
            order_id = %prepared.order_id,
            customer_id = %customer_id,
            "customer notified"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CustomerNotifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, EventId, OrderId, SerializableDomainEvent, Timestamp};
    use crate::domain::menu::ItemCategory;
    use crate::domain::notification::Customer;
    use crate::domain::ordering::WorkerRole;

    fn prepared_for(customer_id: CustomerId) -> EventEnvelope {
        OrderPrepared {
            event_id: EventId::new(),
            order_id: OrderId::new(),
            customer_id,
            worker: WorkerRole::Baker,
            item_type: ItemCategory::Food,
            description: "Muffin with chocolate filling".to_string(),
            prepared_at: Timestamp::now(),
        }
        .to_envelope()
        .unwrap()
    }

    #[tokio::test]
    async fn notifies_only_the_ordering_customer() {
        let system = Arc::new(OrderSystem::new());
        let juan = Arc::new(Customer::new("Juan").unwrap());
        let mary = Arc::new(Customer::new("Mary").unwrap());
        system.attach(juan.clone());
        system.attach(mary.clone());

        let notifier = CustomerNotifier::new(system);
        notifier.handle(prepared_for(juan.id())).await.unwrap();

        assert_eq!(
            juan.notifications(),
            vec!["Your Muffin with chocolate filling is ready"]
        );
        assert!(mary.notifications().is_empty());
    }

    #[tokio::test]
    async fn unknown_customer_is_an_error() {
        let notifier = CustomerNotifier::new(Arc::new(OrderSystem::new()));

        let err = notifier.handle(prepared_for(CustomerId::new())).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        assert!(err.details.contains_key("order_id"));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_serialization_error() {
        let notifier = CustomerNotifier::new(Arc::new(OrderSystem::new()));
        let envelope = EventEnvelope::new(
            "order.prepared.v1",
            "order-1",
            "Order",
            serde_json::json!({"unexpected": true}),
        );

        let err = notifier.handle(envelope).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
