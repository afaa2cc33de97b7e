//! Ports - Interfaces for external dependencies.
//!
//! The ordering handlers talk to the outside world only through these
//! traits; adapters implement them.
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod event_publisher;
mod event_subscriber;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
