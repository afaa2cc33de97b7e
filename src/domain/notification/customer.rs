//! Customer - the observer that receives order notifications.

use std::sync::{PoisonError, RwLock};

use super::OrderObserver;
use crate::domain::foundation::{CustomerId, ValidationError};

/// A customer with an inbox of notifications.
///
/// Customers are shared between orders and the [`super::OrderSystem`] as
/// `Arc<Customer>`, so the inbox uses interior mutability.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    notifications: RwLock<Vec<String>>,
}

impl Customer {
    /// Creates a customer with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(CustomerId::new(), name)
    }

    /// Creates a customer with a known id.
    pub fn with_id(id: CustomerId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("customer_name"));
        }
        Ok(Self {
            id,
            name,
            notifications: RwLock::new(Vec::new()),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Messages received so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OrderObserver for Customer {
    fn observer_id(&self) -> String {
        self.id.to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str) {
        self.notifications
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
