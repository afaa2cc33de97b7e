//! Application handlers.
//!
//! Command handlers that orchestrate domain operations, plus the event
//! handlers that react to what they publish.

pub mod ordering;

pub use ordering::{
    CustomerNotifier, NotifyCustomersCommand, NotifyCustomersHandler, NotifyCustomersResult,
    PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult, PrepareOrdersCommand,
    PrepareOrdersHandler, PrepareOrdersResult, PublishFailure,
};
