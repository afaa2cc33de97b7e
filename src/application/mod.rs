//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CustomerNotifier, NotifyCustomersCommand, NotifyCustomersHandler, NotifyCustomersResult,
    PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult, PrepareOrdersCommand,
    PrepareOrdersHandler, PrepareOrdersResult, PublishFailure,
};
