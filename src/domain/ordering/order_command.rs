//! OrderCommand - a customer's order for one menu item.

use std::sync::Arc;

use tracing::info;

use super::Command;
use crate::domain::foundation::OrderId;
use crate::domain::menu::{ItemCategory, MenuComponent, MenuItem};
use crate::domain::notification::Customer;

/// One item ordered by one customer.
#[derive(Debug, Clone)]
pub struct OrderCommand {
    order_id: OrderId,
    customer: Arc<Customer>,
    item: MenuItem,
}

impl OrderCommand {
    pub fn new(customer: Arc<Customer>, item: MenuItem) -> Self {
        Self {
            order_id: OrderId::new(),
            customer,
            item,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Category of the ordered item; decides which worker prepares it.
    pub fn item_type(&self) -> ItemCategory {
        self.item.category()
    }
}

impl Command for OrderCommand {
    fn execute(&self) -> String {
        let line = format!("Orders a {}", self.description());
        info!(
            order_id = %self.order_id,
            customer = self.customer.name(),
            item_type = %self.item_type(),
            "{}",
            line
        );
        line
    }

    fn description(&self) -> String {
        self.item.description()
    }
}
