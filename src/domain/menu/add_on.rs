//! The add-ons the shop sells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Decoration, JoinStrategy};
use crate::domain::foundation::ValidationError;

/// An add-on from the menu board.
///
/// Each variant fixes a label, a price delta and a join strategy; turning it
/// into a [`Decoration`] is the only way it participates in composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOn {
    Milk,
    Cream,
    Cinnamon,
    ChocolateFilling,
    #[serde(rename = "ham-and-cheese-filling")]
    HamCheeseFilling,
    CaramelTopping,
    DoubleEspresso,
}

impl AddOn {
    /// Returns every add-on in menu-board order.
    pub fn all() -> &'static [AddOn] {
        &[
            AddOn::Milk,
            AddOn::Cream,
            AddOn::Cinnamon,
            AddOn::ChocolateFilling,
            AddOn::HamCheeseFilling,
            AddOn::CaramelTopping,
            AddOn::DoubleEspresso,
        ]
    }

    /// Kebab-case lookup key (e.g. "ham-and-cheese-filling").
    pub fn key(&self) -> &'static str {
        match self {
            AddOn::Milk => "milk",
            AddOn::Cream => "cream",
            AddOn::Cinnamon => "cinnamon",
            AddOn::ChocolateFilling => "chocolate-filling",
            AddOn::HamCheeseFilling => "ham-and-cheese-filling",
            AddOn::CaramelTopping => "caramel-topping",
            AddOn::DoubleEspresso => "double-espresso",
        }
    }

    /// Text that ends up in the item description.
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::Milk => "milk",
            AddOn::Cream => "cream",
            AddOn::Cinnamon => "cinnamon",
            AddOn::ChocolateFilling => "chocolate filling",
            AddOn::HamCheeseFilling => "ham and cheese filling",
            AddOn::CaramelTopping => "caramel topping",
            AddOn::DoubleEspresso => "Double espresso",
        }
    }

    pub fn price_delta(&self) -> f64 {
        match self {
            AddOn::Milk => 0.5,
            AddOn::Cream => 0.6,
            AddOn::Cinnamon => 0.3,
            AddOn::ChocolateFilling => 1.0,
            AddOn::HamCheeseFilling => 1.2,
            AddOn::CaramelTopping => 0.8,
            AddOn::DoubleEspresso => 1.5,
        }
    }

    pub fn join_strategy(&self) -> JoinStrategy {
        match self {
            AddOn::DoubleEspresso => JoinStrategy::PrefixTransform,
            _ => JoinStrategy::AdditiveNamed,
        }
    }

    pub fn to_decoration(&self) -> Decoration {
        match self.join_strategy() {
            JoinStrategy::AdditiveNamed => Decoration::additive(self.label(), self.price_delta()),
            JoinStrategy::PrefixTransform => Decoration::prefix(self.label(), self.price_delta()),
        }
    }
}

impl From<AddOn> for Decoration {
    fn from(add_on: AddOn) -> Self {
        add_on.to_decoration()
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AddOn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::all()
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or_else(|| ValidationError::unknown_value("add-on", s))
    }
}
