//! # Waste Factor Resolution
//!
//! Every material line carries a waste factor: the fraction of extra
//! material bought to cover cuts, mistakes and breakage. It is the product
//! of three independent multipliers:
//!
//! ```text
//! waste = base_rate × skill_multiplier × complexity_multiplier
//! ```
//!
//! | Input          | Values                                                     |
//! |----------------|------------------------------------------------------------|
//! | base rate      | per material, 0.05 - 0.25                                  |
//! | skill          | expert 0.5, intermediate 1.0, beginner 1.5                 |
//! | complexity     | none 1.0, irregular xor obstacles 1.2, both 1.4; ×1.3 high ceiling |
//!
//! The flags combine multiplicatively. The result is capped at the
//! configured maximum (0.60 by default); a capped factor records a
//! provenance note and reports a [`EstimateWarning::WasteFactorClamped`].
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::waste::{resolve_waste_factor, ComplexityFlags, SkillLevel};
//! use rust_decimal_macros::dec;
//!
//! let waste = resolve_waste_factor(
//!     dec!(0.10),
//!     SkillLevel::Beginner,
//!     ComplexityFlags::default(),
//!     dec!(0.60),
//! ).unwrap();
//! assert_eq!(waste.value, dec!(0.15));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{EstimateError, EstimateResult, EstimateWarning};

/// Lowest base rate any material may declare
pub const MIN_BASE_RATE: Decimal = dec!(0.05);

/// Highest base rate any material may declare
pub const MAX_BASE_RATE: Decimal = dec!(0.25);

/// Default cap on a resolved waste factor
pub const DEFAULT_MAX_WASTE_FACTOR: Decimal = dec!(0.60);

/// Self-reported skill of the person doing the work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SkillLevel {
    Expert,
    Intermediate,
    Beginner,
}

impl SkillLevel {
    /// All skill levels, least to most waste
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Expert, SkillLevel::Intermediate, SkillLevel::Beginner];

    /// Waste multiplier for this skill level
    pub fn multiplier(&self) -> Decimal {
        match self {
            SkillLevel::Expert => dec!(0.5),
            SkillLevel::Intermediate => dec!(1.0),
            SkillLevel::Beginner => dec!(1.5),
        }
    }

    /// Lowercase identifier, as accepted by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Expert => "expert",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Beginner => "beginner",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expert" => Ok(SkillLevel::Expert),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "beginner" => Ok(SkillLevel::Beginner),
            _ => Err(EstimateError::invalid_skill_level(s)),
        }
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = EstimateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkillLevel> for String {
    fn from(skill: SkillLevel) -> Self {
        skill.as_str().to_string()
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean signals that raise expected waste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityFlags {
    pub irregular_shape: bool,
    pub has_obstacles: bool,
    pub high_ceiling: bool,
}

impl ComplexityFlags {
    pub fn new(irregular_shape: bool, has_obstacles: bool, high_ceiling: bool) -> Self {
        ComplexityFlags {
            irregular_shape,
            has_obstacles,
            high_ceiling,
        }
    }

    /// Flags set in either operand
    pub fn union(self, other: ComplexityFlags) -> ComplexityFlags {
        ComplexityFlags {
            irregular_shape: self.irregular_shape || other.irregular_shape,
            has_obstacles: self.has_obstacles || other.has_obstacles,
            high_ceiling: self.high_ceiling || other.high_ceiling,
        }
    }

    /// Combined complexity multiplier
    pub fn multiplier(&self) -> Decimal {
        let layout = match (self.irregular_shape, self.has_obstacles) {
            (true, true) => dec!(1.4),
            (true, false) | (false, true) => dec!(1.2),
            (false, false) => dec!(1.0),
        };
        if self.high_ceiling {
            layout * dec!(1.3)
        } else {
            layout
        }
    }
}

/// A resolved waste factor with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteFactor {
    /// Waste fraction actually applied (after clamping)
    pub value: Decimal,
    /// base_rate × skill_multiplier × complexity_multiplier
    pub raw_value: Decimal,
    /// Material base rate
    pub base_rate: Decimal,
    /// Skill multiplier
    pub skill_multiplier: Decimal,
    /// Complexity multiplier
    pub complexity_multiplier: Decimal,
    /// True if `raw_value` exceeded the cap
    pub clamped: bool,
    /// Human-readable provenance notes
    pub notes: Vec<String>,
}

impl WasteFactor {
    /// Waste as a percentage, rounded to two places for display
    pub fn percent(&self) -> Decimal {
        (self.value * Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// `1 + value`, the multiplier applied to a base quantity
    pub fn quantity_multiplier(&self) -> Decimal {
        Decimal::ONE + self.value
    }

    /// Clamp warning for this factor, if it was capped
    pub fn warning(&self, material: &str) -> Option<EstimateWarning> {
        self.clamped.then(|| EstimateWarning::WasteFactorClamped {
            material: material.to_string(),
            raw: self.raw_value,
            clamped_to: self.value,
        })
    }
}

/// Resolve the waste factor for one material line.
///
/// # Errors
///
/// `InvalidInput` if `material_base_rate` is outside 0.05 - 0.25 or
/// `max_waste_factor` is not in (0, 1).
pub fn resolve_waste_factor(
    material_base_rate: Decimal,
    skill: SkillLevel,
    complexity: ComplexityFlags,
    max_waste_factor: Decimal,
) -> EstimateResult<WasteFactor> {
    if material_base_rate < MIN_BASE_RATE || material_base_rate > MAX_BASE_RATE {
        return Err(EstimateError::invalid_input(
            "material_base_rate",
            material_base_rate.to_string(),
            format!("Base rate must be between {} and {}", MIN_BASE_RATE, MAX_BASE_RATE),
        ));
    }
    if max_waste_factor <= Decimal::ZERO || max_waste_factor >= Decimal::ONE {
        return Err(EstimateError::invalid_input(
            "max_waste_factor",
            max_waste_factor.to_string(),
            "Waste cap must be between 0 and 1",
        ));
    }

    let skill_multiplier = skill.multiplier();
    let complexity_multiplier = complexity.multiplier();
    let raw_value = material_base_rate * skill_multiplier * complexity_multiplier;

    let mut notes = vec![format!(
        "base {} × skill {} ({}) × complexity {}",
        material_base_rate, skill_multiplier, skill, complexity_multiplier
    )];

    let clamped = raw_value > max_waste_factor;
    let value = if clamped {
        warn!(
            event = "waste_factor_clamped",
            raw = %raw_value,
            max = %max_waste_factor,
        );
        notes.push(format!("clamped from {} to {}", raw_value, max_waste_factor));
        max_waste_factor
    } else {
        raw_value
    };

    Ok(WasteFactor {
        value,
        raw_value,
        base_rate: material_base_rate,
        skill_multiplier,
        complexity_multiplier,
        clamped,
        notes,
    })
}
