//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing and error types
//! that the menu, ordering and notification modules build on.

mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{CustomerId, OrderId};
pub use timestamp::Timestamp;
