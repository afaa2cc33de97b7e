//! Application configuration module
//!
//! Configuration is loaded from environment variables with the `COFFEE_SHOP`
//! prefix, using `__` to separate nested values. A TOML file can be layered
//! underneath with [`AppConfig::load_with_file`].
//!
//! # Example
//!
//! ```no_run
//! use coffee_shop::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Welcome to {}", config.shop.name);
//! ```

mod error;
mod features;
mod shop;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use shop::{Environment, ShopConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "COFFEE_SHOP";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Shop settings (name, environment, log filter, currency)
    #[serde(default)]
    pub shop: ShopConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COFFEE_SHOP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `COFFEE_SHOP__SHOP__NAME=Bean There` -> `shop.name = "Bean There"`
    /// - `COFFEE_SHOP__FEATURES__SHOW_PRICES=true` -> `features.show_prices = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, with environment variables on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if a
    /// value cannot be parsed.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.shop.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.shop.is_production()
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
