//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations (in-memory)

pub mod events;

pub use events::InMemoryEventBus;
