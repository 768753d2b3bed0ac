//! # Price Lookup
//!
//! Prices come from outside the engine (a retailer cache, a user-entered
//! list). The engine only asks for a price per purchase unit by material
//! name; a missing price leaves the line unpriced and marks the shopping
//! list total as partial.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::pricing::{PriceBook, PriceLookup};
//! use estimate_core::units::Unit;
//! use rust_decimal_macros::dec;
//!
//! let prices = PriceBook::new().with_price("Interior Paint", dec!(34.98));
//! assert_eq!(prices.unit_price("interior paint", Unit::Gallons), Some(dec!(34.98)));
//! assert_eq!(prices.unit_price("Primer", Unit::Gallons), None);
//! ```

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::Unit;

/// Source of unit prices for shopping list lines
pub trait PriceLookup {
    /// Price of one `unit` of `material_name`, if known
    fn unit_price(&self, material_name: &str, unit: Unit) -> Option<Decimal>;
}

/// Lookup that never has a price
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrices;

impl PriceLookup for NoPrices {
    fn unit_price(&self, _material_name: &str, _unit: Unit) -> Option<Decimal> {
        None
    }
}

impl PriceLookup for HashMap<String, Decimal> {
    fn unit_price(&self, material_name: &str, _unit: Unit) -> Option<Decimal> {
        self.get(material_name).copied()
    }
}

impl<P: PriceLookup + ?Sized> PriceLookup for &P {
    fn unit_price(&self, material_name: &str, unit: Unit) -> Option<Decimal> {
        (**self).unit_price(material_name, unit)
    }
}

/// Case-insensitive map of material name to price per purchase unit.
///
/// ## JSON Example
///
/// ```json
/// { "prices": { "interior paint": "34.98", "flooring": "2.49" } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBook {
    prices: BTreeMap<String, Decimal>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(material_name: &str) -> String {
        material_name.trim().to_lowercase()
    }

    /// Add or replace a price (builder style).
    pub fn with_price(mut self, material_name: &str, price: Decimal) -> Self {
        self.insert(material_name, price);
        self
    }

    /// Add or replace a price.
    pub fn insert(&mut self, material_name: &str, price: Decimal) {
        self.prices.insert(Self::key(material_name), price);
    }

    /// Number of priced materials
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True if no prices are known
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Parse a price book from JSON, normalizing names and rejecting
    /// negative prices.
    pub fn from_json_str(json: &str) -> EstimateResult<Self> {
        let raw: PriceBook = serde_json::from_str(json)
            .map_err(|e| EstimateError::invalid_input("prices", "<json>", e.to_string()))?;
        let mut book = PriceBook::new();
        for (name, price) in raw.prices {
            if price < Decimal::ZERO {
                return Err(EstimateError::invalid_quantity(
                    format!("prices.{}", name),
                    price.to_string(),
                    "Price cannot be negative",
                ));
            }
            book.insert(&name, price);
        }
        Ok(book)
    }
}

impl PriceLookup for PriceBook {
    fn unit_price(&self, material_name: &str, _unit: Unit) -> Option<Decimal> {
        self.prices.get(&Self::key(material_name)).copied()
    }
}
