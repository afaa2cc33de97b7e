//! Ordering module - command objects for taking and preparing orders.
//!
//! # Events
//!
//! - `OrderPlaced` - Published when an order command is executed
//! - `OrderPrepared` - Published when a worker's ticket is executed
//! - `OrdersReady` - Published when customers are told orders are ready

mod command;
mod errors;
mod events;
mod order_command;
mod prepare_command;
mod worker;

pub use command::Command;
pub use errors::OrderError;
pub use events::{
    OrderPlaced, OrderPrepared, OrdersReady, ORDERS_READY, ORDER_PLACED, ORDER_PREPARED,
};
pub use order_command::OrderCommand;
pub use prepare_command::PrepareCommand;
pub use worker::WorkerRole;
