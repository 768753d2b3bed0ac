//! # Material Strategies
//!
//! One calculation strategy per material category. Each strategy is a pure
//! function of a room, the request overrides and the engine config that
//! returns a [`StrategyOutput`]: the base (waste-free) quantity, its unit,
//! the package it is sold in, and the material's base waste rate.
//!
//! Dispatch is a plain `match` on [`MaterialCategory`]; there is no trait
//! object per strategy.
//!
//! ## Categories
//!
//! | Category  | Base quantity              | Sold as                  | Base rate |
//! |-----------|----------------------------|--------------------------|-----------|
//! | Paint     | net wall area / coverage   | gallons                  | 0.10      |
//! | Primer    | net wall area / coverage   | gallons                  | 0.10      |
//! | Flooring  | floor area                 | boxes (20 sq ft)         | 0.10 (+0.10 pattern) |
//! | Tile      | floor area / tile size     | boxes of tiles           | 0.15-0.25 |
//! | Grout     | 1 bag per 100 sq ft        | bags                     | 0.10      |
//! | Thinset   | 1 bag per 95 sq ft         | bags                     | 0.10      |
//! | Drywall   | net wall (+ceiling) area   | 4×8 sheets               | 0.12      |
//! | Concrete  | slab volume                | 80 lb bags (0.6 cu ft)   | 0.05      |
//! | Roofing   | roof area                  | bundles (33.3 sq ft)     | 0.10      |
//! | Decking   | linear feet / perimeter    | stock-length boards      | 0.10      |
//! | Lumber    | linear feet                | stock-length boards      | 0.10      |
//! | Fencing   | fence run                  | 8 ft panels              | 0.05      |
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::config::EstimatorConfig;
//! use estimate_core::materials::{MaterialCategory, MaterialOverrides};
//! use estimate_core::measurement::RoomMeasurement;
//! use rust_decimal_macros::dec;
//!
//! let room = RoomMeasurement::with_floor_area(dec!(200));
//! let output = MaterialCategory::Flooring
//!     .base_quantity(&room, &MaterialOverrides::default(), &EstimatorConfig::default())
//!     .unwrap();
//! assert_eq!(output.base_quantity, dec!(200));
//! assert_eq!(output.package_size, dec!(20));
//! ```

pub mod coatings;
pub mod exterior;
pub mod lumber;
pub mod overrides;
pub mod surfaces;

pub use overrides::{MaterialOverrides, TilePattern};

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;
use crate::errors::{EstimateError, EstimateResult};
use crate::measurement::RoomMeasurement;
use crate::rounding::RoundingPolicy;
use crate::units::Unit;

/// What a strategy computes for one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutput {
    /// Waste-free quantity in `base_unit`
    pub base_quantity: Decimal,
    /// Unit the quantity is calculated in
    pub base_unit: Unit,
    /// Unit the material is bought in
    pub purchase_unit: Unit,
    /// Base units per purchase unit (ignored for stock lengths)
    pub package_size: Decimal,
    /// Material base waste rate
    pub base_rate: Decimal,
    /// How the adjusted quantity is rounded for purchase
    pub rounding: RoundingPolicy,
    /// Whether the quantity describes one room or the whole request
    pub scope: QuantityScope,
}

/// Whether a strategy's quantity is per room or per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityScope {
    /// Derived from the room's geometry; summed across rooms
    #[default]
    PerRoom,
    /// Taken from a request override; counted once
    PerRequest,
}

impl StrategyOutput {
    /// Output for a material sold in fixed-size packages
    pub fn packaged(
        base_quantity: Decimal,
        base_unit: Unit,
        purchase_unit: Unit,
        package_size: Decimal,
        base_rate: Decimal,
    ) -> Self {
        StrategyOutput {
            base_quantity,
            base_unit,
            purchase_unit,
            package_size,
            base_rate,
            rounding: RoundingPolicy::PackageMultiple,
            scope: QuantityScope::PerRoom,
        }
    }

    /// Output for boards sold in stock lengths, priced per linear foot
    pub fn stock_lengths(linear_feet: Decimal, base_rate: Decimal) -> Self {
        StrategyOutput {
            base_quantity: linear_feet,
            base_unit: Unit::LinearFeet,
            purchase_unit: Unit::LinearFeet,
            package_size: Decimal::ONE,
            base_rate,
            rounding: RoundingPolicy::StockLengths,
            scope: QuantityScope::PerRoom,
        }
    }

    /// Mark the quantity as request-wide
    pub fn per_request(mut self) -> Self {
        self.scope = QuantityScope::PerRequest;
        self
    }
}

/// Material category, each bound to one calculation strategy.
///
/// Serializes in snake_case (`"paint"`, `"thinset"`); unknown names fail
/// with `UnknownMaterial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MaterialCategory {
    Paint,
    Primer,
    Flooring,
    Tile,
    Grout,
    Thinset,
    Drywall,
    Concrete,
    Roofing,
    Decking,
    Lumber,
    Fencing,
}

impl MaterialCategory {
    /// All material categories
    pub const ALL: [MaterialCategory; 12] = [
        MaterialCategory::Paint,
        MaterialCategory::Primer,
        MaterialCategory::Flooring,
        MaterialCategory::Tile,
        MaterialCategory::Grout,
        MaterialCategory::Thinset,
        MaterialCategory::Drywall,
        MaterialCategory::Concrete,
        MaterialCategory::Roofing,
        MaterialCategory::Decking,
        MaterialCategory::Lumber,
        MaterialCategory::Fencing,
    ];

    /// Lowercase identifier
    pub fn code(&self) -> &'static str {
        match self {
            MaterialCategory::Paint => "paint",
            MaterialCategory::Primer => "primer",
            MaterialCategory::Flooring => "flooring",
            MaterialCategory::Tile => "tile",
            MaterialCategory::Grout => "grout",
            MaterialCategory::Thinset => "thinset",
            MaterialCategory::Drywall => "drywall",
            MaterialCategory::Concrete => "concrete",
            MaterialCategory::Roofing => "roofing",
            MaterialCategory::Decking => "decking",
            MaterialCategory::Lumber => "lumber",
            MaterialCategory::Fencing => "fencing",
        }
    }

    /// Shopping list line name; also the key for price lookups
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Paint => "Interior Paint",
            MaterialCategory::Primer => "Primer",
            MaterialCategory::Flooring => "Flooring",
            MaterialCategory::Tile => "Tile",
            MaterialCategory::Grout => "Grout",
            MaterialCategory::Thinset => "Thinset Mortar",
            MaterialCategory::Drywall => "Drywall Sheets",
            MaterialCategory::Concrete => "Concrete Mix (80 lb)",
            MaterialCategory::Roofing => "Roofing Shingles",
            MaterialCategory::Decking => "Deck Boards",
            MaterialCategory::Lumber => "Lumber",
            MaterialCategory::Fencing => "Fence Panels",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "paint" | "interior_paint" => Ok(MaterialCategory::Paint),
            "primer" => Ok(MaterialCategory::Primer),
            "flooring" | "floor" => Ok(MaterialCategory::Flooring),
            "tile" | "tiles" => Ok(MaterialCategory::Tile),
            "grout" => Ok(MaterialCategory::Grout),
            "thinset" | "thinset_mortar" | "mortar" => Ok(MaterialCategory::Thinset),
            "drywall" | "drywall_sheets" => Ok(MaterialCategory::Drywall),
            "concrete" => Ok(MaterialCategory::Concrete),
            "roofing" | "shingles" => Ok(MaterialCategory::Roofing),
            "decking" | "deck_boards" => Ok(MaterialCategory::Decking),
            "lumber" => Ok(MaterialCategory::Lumber),
            "fencing" | "fence" | "fence_panels" => Ok(MaterialCategory::Fencing),
            _ => Err(EstimateError::UnknownMaterial { value: s.to_string() }),
        }
    }

    /// Run this category's strategy for one room.
    ///
    /// # Errors
    ///
    /// `MissingMeasurement` when the room lacks a dimension the strategy
    /// needs.
    pub fn base_quantity(
        &self,
        room: &RoomMeasurement,
        overrides: &MaterialOverrides,
        config: &EstimatorConfig,
    ) -> EstimateResult<StrategyOutput> {
        let name = self.display_name();
        match self {
            MaterialCategory::Paint => coatings::paint(name, room, overrides),
            MaterialCategory::Primer => coatings::primer(name, room, overrides),
            MaterialCategory::Flooring => surfaces::flooring(name, room, overrides, config),
            MaterialCategory::Tile => surfaces::tile(name, room, overrides, config),
            MaterialCategory::Grout => surfaces::grout(name, room),
            MaterialCategory::Thinset => surfaces::thinset(name, room),
            MaterialCategory::Drywall => surfaces::drywall(name, room, overrides),
            MaterialCategory::Concrete => exterior::concrete(name, room, overrides),
            MaterialCategory::Roofing => exterior::roofing(name, room, overrides),
            MaterialCategory::Decking => lumber::decking(name, room, overrides),
            MaterialCategory::Lumber => lumber::lumber(name, overrides),
            MaterialCategory::Fencing => lumber::fencing(name, room, overrides),
        }
    }
}

impl FromStr for MaterialCategory {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl TryFrom<String> for MaterialCategory {
    type Error = EstimateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_flexible(&value)
    }
}

impl From<MaterialCategory> for String {
    fn from(category: MaterialCategory) -> Self {
        category.code().to_string()
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
