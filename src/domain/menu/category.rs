//! ItemCategory enum tagging what kind of menu item something is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The two kinds of base item on the menu.
///
/// Categories carry no behavior of their own. They decide who prepares
/// an item and how it is labelled on a preparation ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Beverage,
    Food,
}

impl ItemCategory {
    /// Returns all categories.
    pub fn all() -> &'static [ItemCategory] {
        &[ItemCategory::Beverage, ItemCategory::Food]
    }

    /// Returns the lower-case tag used on tickets ("beverage", "food").
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Beverage => "beverage",
            ItemCategory::Food => "food",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| ValidationError::unknown_value("category", s))
    }
}
