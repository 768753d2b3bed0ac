//! Per-request material overrides
//!
//! Optional knobs a user (or the vision step) can set to refine a strategy:
//! a textured wall, a patterned floor, a specific tile size. Anything left
//! unset falls back to the strategy default or the engine config.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Tile layout pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TilePattern {
    /// Straight lay, grid aligned
    #[default]
    Straight,
    /// Mosaic sheets
    Mosaic,
    /// 45° diagonal lay, most cuts at the edges
    Diagonal,
}

impl TilePattern {
    /// Material base waste rate for this layout
    pub fn base_rate(&self) -> Decimal {
        match self {
            TilePattern::Straight => dec!(0.15),
            TilePattern::Mosaic => dec!(0.20),
            TilePattern::Diagonal => dec!(0.25),
        }
    }
}

/// Optional strategy inputs supplied with a request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOverrides {
    /// Paint coverage (sq ft per gallon); replaces the 350/250 default
    pub coverage_per_gallon: Option<Decimal>,
    /// Textured wall surface (lowers default paint coverage to 250)
    pub textured_surface: bool,
    /// Number of paint coats (default 1)
    pub coats: Option<u32>,
    /// Add a primer line to painting projects
    pub include_primer: bool,
    /// Flooring needs pattern matching (+0.10 base waste)
    pub pattern_matching: bool,
    /// Flooring box coverage (sq ft)
    pub sqft_per_box: Option<Decimal>,
    /// Area of a single tile (sq ft)
    pub tile_size_sqft: Option<Decimal>,
    /// Tiles per box
    pub tiles_per_box: Option<Decimal>,
    /// Tile layout
    pub tile_pattern: TilePattern,
    /// Linear feet of lumber or decking needed
    pub linear_feet: Option<Decimal>,
    /// Concrete slab thickness (in)
    pub slab_thickness_in: Option<Decimal>,
    /// Roof area / footprint ratio for pitched roofs
    pub roof_pitch_factor: Option<Decimal>,
    /// Fence run length (ft)
    pub fence_length_ft: Option<Decimal>,
    /// Hang drywall on the ceiling as well as the walls
    pub include_ceiling: bool,
}

impl MaterialOverrides {
    /// Reject overrides no strategy could use.
    pub fn validate(&self) -> EstimateResult<()> {
        let positive = [
            ("coverage_per_gallon", self.coverage_per_gallon),
            ("sqft_per_box", self.sqft_per_box),
            ("tile_size_sqft", self.tile_size_sqft),
            ("tiles_per_box", self.tiles_per_box),
            ("slab_thickness_in", self.slab_thickness_in),
        ];
        for (field, value) in positive {
            if let Some(v) = value {
                if v <= Decimal::ZERO {
                    return Err(EstimateError::invalid_input(field, v.to_string(), "Must be positive"));
                }
            }
        }

        let non_negative = [("linear_feet", self.linear_feet), ("fence_length_ft", self.fence_length_ft)];
        for (field, value) in non_negative {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(EstimateError::invalid_quantity(field, v.to_string(), "Length cannot be negative"));
                }
            }
        }

        if let Some(factor) = self.roof_pitch_factor {
            if factor < Decimal::ONE {
                return Err(EstimateError::invalid_input(
                    "roof_pitch_factor",
                    factor.to_string(),
                    "Pitch factor cannot be below 1.0 (flat roof)",
                ));
            }
        }

        if self.coats == Some(0) {
            return Err(EstimateError::invalid_input("coats", "0", "At least one coat is required"));
        }

        Ok(())
    }
}
