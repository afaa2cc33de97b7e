//! Worker roles and the category-to-worker assignment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PrepareCommand;
use crate::domain::menu::{ItemCategory, MenuComponent, MenuItem};

/// Who prepares an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    Barista,
    Baker,
}

impl WorkerRole {
    /// Beverages go to the barista; everything else to the baker.
    pub fn for_category(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Beverage => WorkerRole::Barista,
            _ => WorkerRole::Baker,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WorkerRole::Barista => "Barista",
            WorkerRole::Baker => "Baker",
        }
    }

    /// Writes a preparation ticket for `item`.
    pub fn prepare(&self, item: &MenuItem) -> PrepareCommand {
        PrepareCommand::new(*self, item.category(), item.description())
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
