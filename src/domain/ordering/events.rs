//! Ordering domain events.
//!
//! - `OrderPlaced` - a customer ordered an item
//! - `OrderPrepared` - a worker prepared an ordered item
//! - `OrdersReady` - customers were told their orders are ready

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, CustomerId, EventId, OrderId, Timestamp};
use crate::domain::menu::ItemCategory;
use super::WorkerRole;

pub const ORDER_PLACED: &str = "order.placed.v1";
pub const ORDER_PREPARED: &str = "order.prepared.v1";
pub const ORDERS_READY: &str = "orders.ready.v1";

// ════════════════════════════════════════════════════════════════════════════
// OrderPlaced
// ════════════════════════════════════════════════════════════════════════════

/// Published when a customer's order is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub event_id: EventId,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub item_type: ItemCategory,
    pub description: String,
    pub price: f64,
    pub placed_at: Timestamp,
}

domain_event!(
    OrderPlaced,
    event_type = ORDER_PLACED,
    schema_version = 1,
    aggregate_id = order_id,
    aggregate_type = "Order",
    occurred_at = placed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// OrderPrepared
// ════════════════════════════════════════════════════════════════════════════

/// Published when a worker has prepared an ordered item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPrepared {
    pub event_id: EventId,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub worker: WorkerRole,
    pub item_type: ItemCategory,
    pub description: String,
    pub prepared_at: Timestamp,
}

domain_event!(
    OrderPrepared,
    event_type = ORDER_PREPARED,
    schema_version = 1,
    aggregate_id = order_id,
    aggregate_type = "Order",
    occurred_at = prepared_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// OrdersReady
// ════════════════════════════════════════════════════════════════════════════

/// Published when the ready broadcast goes out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersReady {
    pub event_id: EventId,
    pub message: String,
    pub recipients: usize,
    pub announced_at: Timestamp,
}

domain_event!(
    OrdersReady,
    event_type = ORDERS_READY,
    schema_version = 1,
    aggregate_id = event_id,
    aggregate_type = "OrderSystem",
    occurred_at = announced_at,
    event_id = event_id
);
