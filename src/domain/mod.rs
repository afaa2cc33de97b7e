//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `menu` - Base items and the decoration chain that prices and describes them
//! - `notification` - Customers observing the order system
//! - `ordering` - Order and preparation commands, workers, ordering events

pub mod foundation;
pub mod menu;
pub mod notification;
pub mod ordering;
