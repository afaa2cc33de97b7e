//! Undecorated menu items.

use serde::{Deserialize, Serialize};

use super::{ItemCategory, MenuComponent};

/// A beverage or food item before any add-ons are applied.
///
/// Fixed name, fixed price, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseItem {
    name: String,
    price: f64,
    category: ItemCategory,
}

impl BaseItem {
    pub fn new(name: impl Into<String>, price: f64, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }

    /// Creates a beverage, e.g. `BaseItem::beverage("Coffee", 2.5)`.
    pub fn beverage(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, ItemCategory::Beverage)
    }

    /// Creates a food item, e.g. `BaseItem::food("Muffin", 3.0)`.
    pub fn food(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, ItemCategory::Food)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }
}

impl MenuComponent for BaseItem {
    fn description(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beverage_exposes_name_and_price() {
        let tea = BaseItem::beverage("Green tea", 2.0);
        assert_eq!(tea.description(), "Green tea");
        assert_eq!(tea.price(), 2.0);
        assert_eq!(tea.category(), ItemCategory::Beverage);
    }

    #[test]
    fn food_is_tagged_food() {
        let muffin = BaseItem::food("Muffin", 3.0);
        assert_eq!(muffin.category(), ItemCategory::Food);
        assert_eq!(muffin.name(), "Muffin");
    }

    #[test]
    fn categories_do_not_change_accessors() {
        let a = BaseItem::beverage("Scone", 1.75);
        let b = BaseItem::food("Scone", 1.75);
        assert_eq!(a.description(), b.description());
        assert_eq!(a.price(), b.price());
    }
}
