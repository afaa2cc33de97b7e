//! Notification module - customers observing the order system.

mod customer;
mod order_system;

pub use customer::Customer;
pub use order_system::{OrderObserver, OrderSystem, ALL_READY_ANNOUNCEMENT};
