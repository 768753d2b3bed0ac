//! # Error Types
//!
//! Structured error types for estimate_core. Errors carry enough context
//! (field, offending value, material) for a caller to tell the user exactly
//! which input needs attention, e.g. "manual input needed for floor area".
//!
//! Non-fatal conditions are reported as [`EstimateWarning`] values alongside
//! the result instead of through `Err`.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{EstimateError, EstimateResult};
//! use rust_decimal::Decimal;
//!
//! fn validate_area(area: Decimal) -> EstimateResult<()> {
//!     if area.is_sign_negative() {
//!         return Err(EstimateError::invalid_quantity(
//!             "floor_area_sqft",
//!             area.to_string(),
//!             "Area cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A quantity or package size is out of range (negative input, non-positive package)
    #[error("Invalid quantity for '{field}': {value} - {reason}")]
    InvalidQuantity {
        field: String,
        value: String,
        reason: String,
    },

    /// Skill level string is not one of beginner, intermediate, expert
    #[error("Invalid skill level: '{value}' (expected beginner, intermediate or expert)")]
    InvalidSkillLevel { value: String },

    /// A measurement a material strategy depends on was not supplied
    #[error("Missing measurement for {material}: {field}")]
    MissingMeasurement { material: String, field: String },

    /// Project type has no strategy to dispatch to
    #[error("Unknown project type: '{value}'")]
    UnknownProjectType { value: String },

    /// Material kind is not recognized
    #[error("Unknown material: '{value}'")]
    UnknownMaterial { value: String },

    /// Any other malformed input
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Engine configuration is unusable
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl EstimateError {
    /// Create an InvalidQuantity error
    pub fn invalid_quantity(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidQuantity {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidQuantity error for arithmetic that left the Decimal range
    pub fn quantity_too_large(field: impl Into<String>, value: Decimal) -> Self {
        Self::invalid_quantity(field, value.to_string(), "Quantity too large")
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingMeasurement error
    pub fn missing_measurement(material: impl Into<String>, field: impl Into<String>) -> Self {
        EstimateError::MissingMeasurement {
            material: material.into(),
            field: field.into(),
        }
    }

    /// Create an InvalidSkillLevel error
    pub fn invalid_skill_level(value: impl Into<String>) -> Self {
        EstimateError::InvalidSkillLevel { value: value.into() }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        EstimateError::Config { reason: reason.into() }
    }

    /// True if the user can fix this by supplying the value by hand
    pub fn needs_manual_input(&self) -> bool {
        matches!(self, EstimateError::MissingMeasurement { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            EstimateError::InvalidSkillLevel { .. } => "INVALID_SKILL_LEVEL",
            EstimateError::MissingMeasurement { .. } => "MISSING_MEASUREMENT",
            EstimateError::UnknownProjectType { .. } => "UNKNOWN_PROJECT_TYPE",
            EstimateError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

/// Informational conditions that do not stop an estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateWarning {
    /// The combined waste factor exceeded the configured maximum and was capped
    WasteFactorClamped {
        material: String,
        raw: Decimal,
        clamped_to: Decimal,
    },
}

impl EstimateWarning {
    /// Short warning code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            EstimateWarning::WasteFactorClamped { .. } => "WASTE_FACTOR_CLAMPED",
        }
    }
}

impl std::fmt::Display for EstimateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateWarning::WasteFactorClamped { material, raw, clamped_to } => write!(
                f,
                "Waste factor for {} capped at {} (computed {})",
                material, clamped_to, raw
            ),
        }
    }
}
