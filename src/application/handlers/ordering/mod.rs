//! Ordering handlers.
//!
//! - `PlaceOrderHandler` - takes an order and publishes `order.placed.v1`
//! - `PrepareOrdersHandler` - routes orders to workers, publishes `order.prepared.v1`
//! - `NotifyCustomersHandler` - broadcasts readiness, publishes `orders.ready.v1`
//! - `CustomerNotifier` - event handler that messages the ordering customer

mod customer_notifier;
mod notify_customers;
mod place_order;
mod prepare_orders;

#[cfg(test)]
pub(crate) mod test_support;

pub use customer_notifier::CustomerNotifier;
pub use notify_customers::{NotifyCustomersCommand, NotifyCustomersHandler, NotifyCustomersResult};
pub use place_order::{PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult};
pub use prepare_orders::{
    PrepareOrdersCommand, PrepareOrdersHandler, PrepareOrdersResult, PublishFailure,
};
