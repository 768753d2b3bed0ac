//! # Unit Types
//!
//! Units of measure for calculated and purchasable quantities, plus
//! type-safe wrappers for the geometric quantities the strategies work in.
//!
//! ## Design Philosophy
//!
//! Wrappers are thin newtypes over [`Decimal`] rather than a full units
//! library:
//! - Estimation only needs feet, square feet and cubic feet
//! - JSON serialization stays clean (just numbers)
//! - Decimal arithmetic keeps quantities and prices exact
//!
//! Measurements come straight from user input, so products and quotients
//! go through the `checked_*` helpers. A result outside the [`Decimal`]
//! range is an `InvalidQuantity` error, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Feet, SqFt};
//! use rust_decimal_macros::dec;
//!
//! let length = Feet(dec!(12));
//! let width = Feet(dec!(10));
//! let floor: SqFt = length.checked_area(width, "floor_area_sqft").unwrap();
//! assert_eq!(floor.0, dec!(120));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

use crate::errors::{EstimateError, EstimateResult};

// ============================================================================
// Units of Measure
// ============================================================================

/// Unit of measure for a calculated or purchased quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Gallons,
    SquareFeet,
    LinearFeet,
    CubicFeet,
    Boxes,
    Bags,
    Pieces,
    Bundles,
    Sheets,
    Tiles,
}

impl Unit {
    /// Short symbol for reports
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Gallons => "gal",
            Unit::SquareFeet => "sq ft",
            Unit::LinearFeet => "lin ft",
            Unit::CubicFeet => "cu ft",
            Unit::Boxes => "box",
            Unit::Bags => "bag",
            Unit::Pieces => "pc",
            Unit::Bundles => "bundle",
            Unit::Sheets => "sheet",
            Unit::Tiles => "tile",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Checked Arithmetic
// ============================================================================

/// `lhs × rhs`, or `InvalidQuantity` for `field` when the product overflows.
pub fn checked_product(field: &str, lhs: Decimal, rhs: Decimal) -> EstimateResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EstimateError::quantity_too_large(field, lhs))
}

/// `lhs / rhs`, or `InvalidQuantity` for `field` when the quotient overflows.
///
/// Divisors are validated positive before they get here.
pub fn checked_quotient(field: &str, lhs: Decimal, rhs: Decimal) -> EstimateResult<Decimal> {
    lhs.checked_div(rhs)
        .ok_or_else(|| EstimateError::quantity_too_large(field, lhs))
}

/// `lhs + rhs`, or `InvalidQuantity` for `field` when the sum overflows.
pub fn checked_sum(field: &str, lhs: Decimal, rhs: Decimal) -> EstimateResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EstimateError::quantity_too_large(field, lhs))
}

// ============================================================================
// Geometric Quantities
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub Decimal);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub Decimal);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub Decimal);

impl Feet {
    /// Area of a `self` × `width` rectangle
    pub fn checked_area(self, width: Feet, field: &str) -> EstimateResult<SqFt> {
        checked_product(field, self.0, width.0).map(SqFt)
    }
}

/// Inches per foot
pub const INCHES_PER_FOOT: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Volume of a slab of `area` poured `thickness_in` inches thick.
///
/// Multiplies before dividing so whole-inch slabs stay exact.
pub fn slab_volume(area: SqFt, thickness_in: Decimal) -> EstimateResult<CuFt> {
    let sqft_inches = checked_product("slab_volume", area.0, thickness_in)?;
    checked_quotient("slab_volume", sqft_inches, INCHES_PER_FOOT).map(CuFt)
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        /// Saturates at the Decimal bounds
        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_sub(rhs.0))
            }
        }

        impl $type {
            /// Get the raw Decimal value
            pub fn value(self) -> Decimal {
                self.0
            }

            /// Clamp negative values to zero
            pub fn non_negative(self) -> Self {
                Self(self.0.max(Decimal::ZERO))
            }

            /// Sum of two quantities, `InvalidQuantity` on overflow
            pub fn checked_add(self, rhs: Self, field: &str) -> EstimateResult<Self> {
                checked_sum(field, self.0, rhs.0).map(Self)
            }

            /// Scale by a dimensionless factor, `InvalidQuantity` on overflow
            pub fn checked_scale(self, factor: Decimal, field: &str) -> EstimateResult<Self> {
                checked_product(field, self.0, factor).map(Self)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
