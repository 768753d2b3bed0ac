//! # Estimator Configuration
//!
//! Tunable thresholds for the estimation engine, loadable from TOML so
//! product decisions (clamp limit, obstacle threshold) change without code
//! changes. Every field has a default; an empty file is a valid config.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::config::EstimatorConfig;
//! use rust_decimal_macros::dec;
//!
//! let config = EstimatorConfig::from_toml_str(r#"
//!     max_waste_factor = "0.50"
//!     obstacle_threshold = 4
//! "#).unwrap();
//!
//! assert_eq!(config.max_waste_factor, dec!(0.50));
//! assert_eq!(config.obstacle_threshold, 4);
//! assert_eq!(config.high_ceiling_threshold_ft, dec!(10));
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::EstimateError;
use crate::rounding::STANDARD_STOCK_LENGTHS_FT;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for EstimateError {
    fn from(err: ConfigError) -> Self {
        EstimateError::config(err.to_string())
    }
}

/// Engine-wide estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Upper bound on a resolved waste factor (fraction, e.g. 0.60)
    pub max_waste_factor: Decimal,

    /// A room has obstacles when doors + windows exceed this count
    pub obstacle_threshold: u32,

    /// Ceilings taller than this (ft) count as high ceilings
    pub high_ceiling_threshold_ft: Decimal,

    /// Sellable board lengths (ft) for lumber and decking
    pub stock_lengths_ft: Vec<Decimal>,

    /// Flooring box coverage (sq ft) when the request does not give one
    pub default_sqft_per_box: Decimal,

    /// Tiles per box when the request does not give one
    pub default_tiles_per_box: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            max_waste_factor: dec!(0.60),
            obstacle_threshold: 3,
            high_ceiling_threshold_ft: dec!(10),
            stock_lengths_ft: STANDARD_STOCK_LENGTHS_FT.iter().map(|l| Decimal::from(*l)).collect(),
            default_sqft_per_box: dec!(20),
            default_tiles_per_box: dec!(10),
        }
    }
}

impl EstimatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is unreadable, is not valid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EstimatorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the waste clamp.
    pub fn with_max_waste_factor(mut self, max: Decimal) -> Self {
        self.max_waste_factor = max;
        self
    }

    /// Sets the obstacle threshold.
    pub fn with_obstacle_threshold(mut self, threshold: u32) -> Self {
        self.obstacle_threshold = threshold;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_waste_factor <= Decimal::ZERO || self.max_waste_factor >= Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "max_waste_factor must be in (0, 1), got {}",
                self.max_waste_factor
            )));
        }
        if self.high_ceiling_threshold_ft <= Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "high_ceiling_threshold_ft must be positive, got {}",
                self.high_ceiling_threshold_ft
            )));
        }
        if self.stock_lengths_ft.is_empty() {
            return Err(ConfigError::Invalid("stock_lengths_ft cannot be empty".to_string()));
        }
        if let Some(bad) = self.stock_lengths_ft.iter().find(|l| **l <= Decimal::ZERO) {
            return Err(ConfigError::Invalid(format!("stock length must be positive, got {}", bad)));
        }
        if self.default_sqft_per_box <= Decimal::ZERO {
            return Err(ConfigError::Invalid("default_sqft_per_box must be positive".to_string()));
        }
        if self.default_tiles_per_box <= Decimal::ZERO {
            return Err(ConfigError::Invalid("default_tiles_per_box must be positive".to_string()));
        }
        Ok(())
    }
}
