//! # Shopping List
//!
//! The engine's output: one [`ShoppingListItem`] per material that needs
//! buying, the per-material failures that could not be estimated, and any
//! non-fatal warnings (waste factor clamps).
//!
//! Every quantity keeps two views:
//! - `calculated_quantity` / `adjusted_quantity` / `purchased_coverage` are
//!   in the material's base unit (gallons, sq ft, tiles, cu ft, linear ft)
//! - `actual_purchase_quantity` is in `unit_of_measure` (gallons, boxes,
//!   bags, linear ft of boards)
//!
//! `purchased_coverage >= adjusted_quantity` always holds: quantities are
//! never rounded down.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateWarning};
use crate::materials::MaterialCategory;
use crate::rounding::StockPiece;
use crate::units::Unit;
use crate::waste::WasteFactor;

/// One purchasable line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Display name, also used for price lookups
    pub material_name: String,
    pub category: MaterialCategory,

    /// Exact waste-free quantity summed across rooms (base unit)
    pub calculated_quantity: Decimal,
    /// Unit of the calculated quantities
    pub base_unit: Unit,

    /// Waste factor with provenance
    pub waste: WasteFactor,
    /// Waste factor as a percentage, rounded for display
    pub waste_factor_percent: Decimal,

    /// `calculated_quantity × (1 + waste)` (base unit)
    pub adjusted_quantity: Decimal,
    /// What the purchase actually covers (base unit)
    pub purchased_coverage: Decimal,

    /// Quantity to buy, in `unit_of_measure`
    pub actual_purchase_quantity: Decimal,
    pub unit_of_measure: Unit,
    /// Base units per purchase unit
    pub package_size: Decimal,

    /// Board breakdown for stock-length materials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_pieces: Option<Vec<StockPiece>>,

    /// Price per `unit_of_measure`, when known
    pub unit_price: Option<Decimal>,
    /// `actual_purchase_quantity × unit_price`, rounded to cents
    pub estimated_total_cost: Option<Decimal>,
}

impl ShoppingListItem {
    /// True if the line has a price
    pub fn is_priced(&self) -> bool {
        self.estimated_total_cost.is_some()
    }

    /// Board count for stock-length materials
    pub fn board_count(&self) -> Option<u32> {
        self.stock_pieces
            .as_ref()
            .map(|pieces| pieces.iter().fold(0u32, |n, p| n.saturating_add(p.count)))
    }
}

/// A material that could not be estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialFailure {
    pub material: String,
    pub category: MaterialCategory,
    /// Room that failed, when the failure came from one room's measurement
    pub room_index: Option<usize>,
    pub error: EstimateError,
}

impl MaterialFailure {
    /// Short prompt for the user
    pub fn message(&self) -> String {
        if self.error.needs_manual_input() {
            format!("Manual input needed for {}: {}", self.material, self.error)
        } else {
            format!("Could not estimate {}: {}", self.material, self.error)
        }
    }
}

impl std::fmt::Display for MaterialFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.room_index {
            Some(index) => write!(f, "{} (room {})", self.message(), index + 1),
            None => write!(f, "{}", self.message()),
        }
    }
}

/// Result of one estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub failures: Vec<MaterialFailure>,
    pub warnings: Vec<EstimateWarning>,
    /// Sum of priced item totals
    pub total_estimated_cost: Decimal,
    /// False when any item lacks a price
    pub pricing_complete: bool,
}

impl ShoppingList {
    /// Build from items, computing the total and pricing completeness.
    pub fn from_parts(
        items: Vec<ShoppingListItem>,
        failures: Vec<MaterialFailure>,
        warnings: Vec<EstimateWarning>,
    ) -> Self {
        let total_estimated_cost = items
            .iter()
            .filter_map(|item| item.estimated_total_cost)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let pricing_complete = items.iter().all(ShoppingListItem::is_priced);
        ShoppingList {
            items,
            failures,
            warnings,
            total_estimated_cost,
            pricing_complete,
        }
    }

    /// True if the total excludes at least one unpriced item
    pub fn is_partial(&self) -> bool {
        !self.pricing_complete
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Line for a category, if it was estimated
    pub fn item(&self, category: MaterialCategory) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.category == category)
    }
}
