//! PrepareCommand - a worker's preparation ticket.

use tracing::info;

use super::{Command, WorkerRole};
use crate::domain::menu::ItemCategory;

/// Preparation of one item by one worker.
///
/// The description is captured when the ticket is written, not re-read
/// from the item at execution time.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareCommand {
    worker: WorkerRole,
    item_type: ItemCategory,
    description: String,
}

impl PrepareCommand {
    pub fn new(worker: WorkerRole, item_type: ItemCategory, description: impl Into<String>) -> Self {
        Self {
            worker,
            item_type,
            description: description.into(),
        }
    }

    pub fn worker(&self) -> WorkerRole {
        self.worker
    }

    pub fn item_type(&self) -> ItemCategory {
        self.item_type
    }
}

impl Command for PrepareCommand {
    fn execute(&self) -> String {
        let line = format!(
            "[{}]: Preparing {}: {}",
            self.worker.title(),
            self.item_type,
            self.description
        );
        info!(worker = self.worker.title(), item_type = %self.item_type, "{}", line);
        line
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
