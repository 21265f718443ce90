use config::{Config, File};
use serde::Deserialize;

use crate::error::ConfigurationError;

/// Alert rule thresholds.
///
/// Passed explicitly into the rule engine and the aggregator so both stay
/// testable with arbitrary values; nothing in the core reads process-wide
/// state. Thresholds are whole numbers, matching the dashboard's settings
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AlertThresholds {
    /// Upper bound of the low-stock band (0 < stock <= low_stock_max)
    #[serde(default = "default_low_stock_max")]
    pub low_stock_max: u32,
    /// Query count above which a product counts as high-interest (strict)
    #[serde(default = "default_high_interest_min")]
    pub high_interest_min: u32,
    /// Unit price above which a product counts as high-priced (strict)
    #[serde(default = "default_high_price_min")]
    pub high_price_min: u32,
    /// Out-of-stock percentage above which a category is at risk (strict)
    #[serde(default = "default_category_at_risk_pct")]
    pub category_at_risk_pct: u32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_stock_max: default_low_stock_max(),
            high_interest_min: default_high_interest_min(),
            high_price_min: default_high_price_min(),
            category_at_risk_pct: default_category_at_risk_pct(),
        }
    }
}

fn default_low_stock_max() -> u32 {
    10
}
fn default_high_interest_min() -> u32 {
    50
}
fn default_high_price_min() -> u32 {
    1000
}
fn default_category_at_risk_pct() -> u32 {
    30 // Percent of a category out of stock
}

impl AlertThresholds {
    /// Validate threshold values.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.category_at_risk_pct > 100 {
            return Err(ConfigurationError::invalid_value(
                "category_at_risk_pct",
                format!("{} is not a percentage (0-100)", self.category_at_risk_pct),
            ));
        }
        Ok(())
    }
}

/// Engine settings.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub thresholds: AlertThresholds,
}

impl Settings {
    /// Load settings from the `RUN_MODE` configuration file (optional) with
    /// environment overrides, then validate.
    pub fn new() -> Result<Self, ConfigurationError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Ok(value) = std::env::var("INVENTORY_LOW_STOCK_MAX") {
            builder = builder.set_override("thresholds.low_stock_max", value)?;
        }
        if let Ok(value) = std::env::var("INVENTORY_HIGH_INTEREST_MIN") {
            builder = builder.set_override("thresholds.high_interest_min", value)?;
        }
        if let Ok(value) = std::env::var("INVENTORY_HIGH_PRICE_MIN") {
            builder = builder.set_override("thresholds.high_price_min", value)?;
        }
        if let Ok(value) = std::env::var("INVENTORY_CATEGORY_AT_RISK_PCT") {
            builder = builder.set_override("thresholds.category_at_risk_pct", value)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.thresholds.validate()?;
        Ok(settings)
    }
}
