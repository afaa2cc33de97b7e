//! Shop configuration

use serde::Deserialize;
use std::fmt;

use super::error::ValidationError;

/// Shop-wide settings for the simulation binary
#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    /// Name printed in the simulation banner
    #[serde(default = "default_name")]
    pub name: String,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Symbol printed in front of prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        write!(f, "{}", name)
    }
}

impl ShopConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Formats a price with the configured currency symbol, two decimals.
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, price)
    }

    /// Validate shop configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyShopName);
        }
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        if self.currency_symbol.is_empty() {
            return Err(ValidationError::EmptyCurrencySymbol);
        }
        Ok(())
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            environment: Environment::default(),
            log_level: default_log_level(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_name() -> String {
    "Coffee Shop".to_string()
}

fn default_log_level() -> String {
    "info,coffee_shop=debug".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
