//! Estimate feedback
//!
//! After a job, the user reports how much of each material was really used.
//! Feedback is recorded against the shopping list line it concerns; the
//! engine does not adjust future estimates from it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::materials::MaterialCategory;
use crate::shopping_list::ShoppingListItem;
use crate::units::Unit;

/// Estimated versus actual usage of one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateFeedback {
    pub material: MaterialCategory,
    pub estimated_quantity: Decimal,
    pub actual_quantity: Decimal,
    pub unit: Unit,
    /// 1 to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl EstimateFeedback {
    /// Feedback on a shopping list line, compared in its purchase unit.
    pub fn from_item(item: &ShoppingListItem, actual_quantity: Decimal) -> EstimateResult<Self> {
        let feedback = EstimateFeedback {
            material: item.category,
            estimated_quantity: item.actual_purchase_quantity,
            actual_quantity,
            unit: item.unit_of_measure,
            rating: None,
            comments: None,
        };
        feedback.validate()?;
        Ok(feedback)
    }

    pub fn with_rating(mut self, rating: u8) -> EstimateResult<Self> {
        self.rating = Some(rating);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> EstimateResult<()> {
        if self.actual_quantity < Decimal::ZERO {
            return Err(EstimateError::invalid_quantity(
                "actual_quantity",
                self.actual_quantity.to_string(),
                "Actual quantity cannot be negative",
            ));
        }
        if self.estimated_quantity < Decimal::ZERO {
            return Err(EstimateError::invalid_quantity(
                "estimated_quantity",
                self.estimated_quantity.to_string(),
                "Estimated quantity cannot be negative",
            ));
        }
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(EstimateError::invalid_input(
                    "rating",
                    rating.to_string(),
                    "Rating must be between 1 and 5",
                ));
            }
        }
        Ok(())
    }

    /// `(1 - |actual - estimated| / actual) × 100`, to two places.
    ///
    /// `None` when nothing was actually used, or when the miss is too large
    /// to express as a percentage. Can go negative when the estimate was
    /// off by more than the actual amount.
    pub fn accuracy_percentage(&self) -> Option<Decimal> {
        if self.actual_quantity.is_zero() {
            return None;
        }
        let miss = self.actual_quantity.checked_sub(self.estimated_quantity)?.abs();
        let error = miss.checked_div(self.actual_quantity)?;
        let accuracy = Decimal::ONE.checked_sub(error)?.checked_mul(Decimal::ONE_HUNDRED)?;
        Some(accuracy.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Positive when more was bought than used
    pub fn overbuy(&self) -> Decimal {
        self.estimated_quantity - self.actual_quantity
    }
}
