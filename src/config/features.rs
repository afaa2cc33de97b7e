//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for the simulation binary
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Broadcast the "orders ready" announcement after preparation
    #[serde(default = "default_notify_customers")]
    pub notify_customers: bool,

    /// Print prices next to order lines
    #[serde(default)]
    pub show_prices: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            notify_customers: default_notify_customers(),
            show_prices: false,
        }
    }
}

fn default_notify_customers() -> bool {
    true
}
