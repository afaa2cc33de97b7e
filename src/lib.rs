//! Coffee Shop - decorated menu items, orders, and customer notifications.
//!
//! Menu items are a base item plus an ordered list of decorations that
//! rewrite the description and add to the price. Orders flow through
//! command handlers that publish domain events onto an event bus.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
