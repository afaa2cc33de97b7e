//! MenuItem - a base item plus its ordered decoration chain.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BaseItem, Decoration, ItemCategory, MenuComponent};

/// A base item wrapped in zero or more decorations.
///
/// Decorations are stored innermost first. Decorating consumes the
/// composite and returns a new one that owns it, so a chain is never
/// shared between two items.
///
/// # Example
///
/// ```
/// use coffee_shop::domain::menu::{AddOn, BaseItem, MenuComponent, MenuItem};
///
/// let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
///     .decorate(AddOn::Milk)
///     .decorate(AddOn::Cream)
///     .decorate(AddOn::Cinnamon);
///
/// assert_eq!(coffee.description(), "Coffee with milk, cream and cinnamon");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    base: BaseItem,
    decorations: Vec<Decoration>,
}

impl MenuItem {
    pub fn new(base: BaseItem) -> Self {
        Self {
            base,
            decorations: Vec::new(),
        }
    }

    /// Wraps this item in one more decoration.
    pub fn decorate(mut self, decoration: impl Into<Decoration>) -> Self {
        self.decorations.push(decoration.into());
        self
    }

    /// Applies each decoration in iteration order.
    pub fn decorate_all<I, D>(self, decorations: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Decoration>,
    {
        decorations.into_iter().fold(self, MenuItem::decorate)
    }

    pub fn base(&self) -> &BaseItem {
        &self.base
    }

    /// Decorations, innermost first.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn category(&self) -> ItemCategory {
        self.base.category()
    }

    /// Number of decorations wrapped around the base item.
    pub fn depth(&self) -> usize {
        self.decorations.len()
    }
}

impl From<BaseItem> for MenuItem {
    fn from(base: BaseItem) -> Self {
        Self::new(base)
    }
}

impl MenuComponent for MenuItem {
    fn description(&self) -> String {
        self.decorations
            .iter()
            .fold(self.base.description(), |inner, decoration| {
                decoration.apply(&inner)
            })
    }

    fn price(&self) -> f64 {
        self.decorations
            .iter()
            .fold(self.base.price(), |inner, decoration| {
                inner + decoration.price_delta()
            })
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::AddOn;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_price(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected price {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn coffee_with_milk_cream_and_cinnamon() {
        let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::Milk)
            .decorate(AddOn::Cream)
            .decorate(AddOn::Cinnamon);

        assert_eq!(coffee.description(), "Coffee with milk, cream and cinnamon");
        assert_price(coffee.price(), 3.9);
    }

    #[test]
    fn muffin_with_chocolate_filling_and_caramel_topping() {
        let muffin = MenuItem::new(BaseItem::food("Muffin", 3.0))
            .decorate_all([AddOn::ChocolateFilling, AddOn::CaramelTopping]);

        assert_eq!(
            muffin.description(),
            "Muffin with chocolate filling and caramel topping"
        );
        assert_price(muffin.price(), 4.8);
    }

    #[test]
    fn undecorated_item_reports_base_values() {
        let tea = MenuItem::new(BaseItem::beverage("Green tea", 2.0));

        assert_eq!(tea.description(), "Green tea");
        assert_eq!(tea.price(), 2.0);
        assert_eq!(tea.depth(), 0);
    }

    #[test]
    fn double_espresso_then_cream() {
        let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::DoubleEspresso)
            .decorate(AddOn::Cream);

        assert_eq!(coffee.description(), "Double espresso coffee with cream");
        assert_price(coffee.price(), 4.6);
    }

    #[test]
    fn sandwich_with_ham_and_cheese_filling() {
        let sandwich =
            MenuItem::new(BaseItem::food("Sandwich", 4.0)).decorate(AddOn::HamCheeseFilling);

        assert_eq!(sandwich.description(), "Sandwich with ham and cheese filling");
        assert_price(sandwich.price(), 5.2);
    }

    #[test]
    fn prefix_after_additive_lowercases_accumulated_phrase() {
        let latte = MenuItem::new(BaseItem::beverage("Latte", 3.0))
            .decorate(Decoration::additive("Vanilla Syrup", 0.4))
            .decorate(AddOn::DoubleEspresso);

        assert_eq!(latte.description(), "Double espresso latte with vanilla syrup");
    }

    #[test]
    fn additive_after_prefix_continues_on_transformed_text() {
        let latte = MenuItem::new(BaseItem::beverage("Latte", 3.0))
            .decorate(AddOn::DoubleEspresso)
            .decorate(Decoration::additive("Vanilla Syrup", 0.4))
            .decorate(AddOn::Milk)
            .decorate(AddOn::Cinnamon);

        assert_eq!(
            latte.description(),
            "Double espresso latte with Vanilla Syrup, milk and cinnamon"
        );
    }

    #[test]
    fn repeated_prefix_stacks_qualifiers() {
        let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::DoubleEspresso)
            .decorate(AddOn::DoubleEspresso);

        assert_eq!(coffee.description(), "Double espresso double espresso coffee");
        assert_price(coffee.price(), 5.5);
    }

    #[test]
    fn duplicate_add_ons_are_allowed() {
        let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::Milk)
            .decorate(AddOn::Milk);

        assert_eq!(coffee.description(), "Coffee with milk and milk");
        assert_price(coffee.price(), 3.5);
    }

    #[test]
    fn decorations_are_kept_innermost_first() {
        let coffee = MenuItem::from(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::Milk)
            .decorate(AddOn::DoubleEspresso);

        let labels: Vec<_> = coffee.decorations().iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["milk", "Double espresso"]);
        assert_eq!(coffee.category(), ItemCategory::Beverage);
    }

    #[test]
    fn display_matches_description() {
        let muffin = MenuItem::new(BaseItem::food("Muffin", 3.0)).decorate(AddOn::CaramelTopping);
        assert_eq!(muffin.to_string(), muffin.description());
    }

    #[test]
    fn serde_preserves_chain() {
        let coffee = MenuItem::new(BaseItem::beverage("Coffee", 2.5))
            .decorate(AddOn::DoubleEspresso)
            .decorate(AddOn::Cream);

        let json = serde_json::to_string(&coffee).unwrap();
        let restored: MenuItem = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.description(), coffee.description());
    }

    fn any_add_on() -> impl Strategy<Value = AddOn> {
        prop::sample::select(AddOn::all().to_vec())
    }

    fn additive_add_on() -> impl Strategy<Value = AddOn> {
        // labels without an inner " and " so the join structure stays countable
        prop::sample::select(vec![
            AddOn::Milk,
            AddOn::Cream,
            AddOn::Cinnamon,
            AddOn::ChocolateFilling,
            AddOn::CaramelTopping,
        ])
    }

    proptest! {
        #[test]
        fn price_is_base_plus_sum_of_deltas(
            base in 0.0f64..50.0,
            add_ons in prop::collection::vec(any_add_on(), 0..12),
        ) {
            let item = MenuItem::new(BaseItem::beverage("Coffee", base)).decorate_all(add_ons.clone());
            let expected = base + add_ons.iter().map(|a| a.price_delta()).sum::<f64>();

            prop_assert!((item.price() - expected).abs() < TOLERANCE);
        }

        #[test]
        fn price_ignores_application_order(
            add_ons in prop::collection::vec(any_add_on(), 0..12),
        ) {
            let forward = MenuItem::new(BaseItem::food("Bagel", 2.25)).decorate_all(add_ons.clone());
            let backward = MenuItem::new(BaseItem::food("Bagel", 2.25))
                .decorate_all(add_ons.into_iter().rev());

            prop_assert!((forward.price() - backward.price()).abs() < TOLERANCE);
        }

        #[test]
        fn accessors_are_idempotent(
            add_ons in prop::collection::vec(any_add_on(), 0..12),
        ) {
            let item = MenuItem::new(BaseItem::beverage("Mocha", 3.1)).decorate_all(add_ons);

            prop_assert_eq!(item.description(), item.description());
            prop_assert_eq!(item.price().to_bits(), item.price().to_bits());
        }

        #[test]
        fn additive_chain_reads_as_natural_list(
            name in "[A-Z][a-z]{2,10}",
            add_ons in prop::collection::vec(additive_add_on(), 0..8),
        ) {
            let item = MenuItem::new(BaseItem::beverage(name.clone(), 1.0))
                .decorate_all(add_ons.clone());
            let labels: Vec<&str> = add_ons.iter().map(|a| a.label()).collect();

            let expected = match labels.split_last() {
                None => name,
                Some((last, [])) => format!("{} with {}", name, last),
                Some((last, rest)) => format!("{} with {} and {}", name, rest.join(", "), last),
            };

            prop_assert_eq!(item.description(), expected);
        }
    }
}
