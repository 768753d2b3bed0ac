//! # Purchase Rounding
//!
//! Converts continuous, waste-adjusted quantities into amounts a store will
//! actually sell. Two policies exist:
//!
//! - **Package multiples** ([`round_up_to_package`]): paint by the gallon,
//!   flooring by the box, grout by the bag. Always the smallest multiple of
//!   the package size that covers the quantity.
//! - **Stock lengths** ([`round_up_to_stock_lengths`]): lumber and decking
//!   boards come in fixed lengths (8, 10, 12, 16 ft). The run is covered with
//!   longest boards, and the last remainder takes the shortest board that
//!   covers it.
//!
//! Rounding never goes down. A zero quantity rounds to zero; callers omit
//! such lines instead of listing a zero-cost item.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::rounding::{round_up_to_package, packages_needed};
//! use rust_decimal_macros::dec;
//!
//! // 240 sq ft of flooring in 20 sq ft boxes
//! assert_eq!(round_up_to_package(dec!(240), dec!(20)).unwrap(), dec!(240));
//! assert_eq!(packages_needed(dec!(240), dec!(20)).unwrap(), dec!(12));
//!
//! // 0.99 gallons of paint still means one whole gallon
//! assert_eq!(round_up_to_package(dec!(0.99), dec!(1)).unwrap(), dec!(1));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::{checked_product, checked_quotient, checked_sum};

/// Standard sellable board lengths in feet
pub const STANDARD_STOCK_LENGTHS_FT: [u32; 4] = [8, 10, 12, 16];

/// How a strategy's adjusted quantity becomes a purchase quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Whole packages of a fixed size
    PackageMultiple,
    /// Boards of standard stock lengths
    StockLengths,
}

fn validate_quantity(exact_quantity: Decimal) -> EstimateResult<()> {
    if exact_quantity < Decimal::ZERO {
        return Err(EstimateError::invalid_quantity(
            "exact_quantity",
            exact_quantity.to_string(),
            "Quantity cannot be negative",
        ));
    }
    Ok(())
}

fn validate_package(package_size: Decimal) -> EstimateResult<()> {
    if package_size <= Decimal::ZERO {
        return Err(EstimateError::invalid_quantity(
            "package_size",
            package_size.to_string(),
            "Package size must be positive",
        ));
    }
    Ok(())
}

/// Number of whole packages needed to cover `exact_quantity`.
///
/// Returns `ceil(exact_quantity / package_size)` as a whole Decimal.
///
/// # Errors
///
/// `InvalidQuantity` if `exact_quantity < 0` or `package_size <= 0`, or
/// when the package count falls outside the Decimal range.
pub fn packages_needed(exact_quantity: Decimal, package_size: Decimal) -> EstimateResult<Decimal> {
    validate_quantity(exact_quantity)?;
    validate_package(package_size)?;

    if exact_quantity.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let mut count = checked_quotient("package_count", exact_quantity, package_size)?.ceil();

    // Decimal division rounds at 28 digits; correct a quotient that landed
    // one package off in either direction.
    if checked_product("package_count", count, package_size)? < exact_quantity {
        count = checked_sum("package_count", count, Decimal::ONE)?;
    } else if count > Decimal::ONE
        && checked_product("package_count", count - Decimal::ONE, package_size)? >= exact_quantity
    {
        count -= Decimal::ONE;
    }

    Ok(count)
}

/// Smallest multiple of `package_size` that is `>= exact_quantity`.
///
/// # Errors
///
/// `InvalidQuantity` if `exact_quantity < 0` or `package_size <= 0`, or
/// when the rounded quantity falls outside the Decimal range.
pub fn round_up_to_package(exact_quantity: Decimal, package_size: Decimal) -> EstimateResult<Decimal> {
    let count = packages_needed(exact_quantity, package_size)?;
    checked_product("package_count", count, package_size)
}

/// Boards of one stock length in a cut list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPiece {
    /// Board length in feet
    pub length_ft: Decimal,
    /// Number of boards of this length
    pub count: u32,
}

/// Result of covering a linear run with stock-length boards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockCut {
    /// Boards to buy, longest first
    pub pieces: Vec<StockPiece>,
    /// Total purchased length in feet
    pub total_length_ft: Decimal,
}

impl StockCut {
    /// Total number of boards
    pub fn piece_count(&self) -> u32 {
        self.pieces.iter().fold(0u32, |n, p| n.saturating_add(p.count))
    }
}

/// Cover `run_ft` with boards from `stock_lengths_ft`.
///
/// Longest boards are used while the remaining run exceeds the longest
/// length; the remainder gets the shortest board that covers it.
///
/// # Errors
///
/// `InvalidQuantity` for a negative run, an empty length table, a
/// non-positive length, or a run needing more than `u32::MAX` boards.
pub fn round_up_to_stock_lengths(run_ft: Decimal, stock_lengths_ft: &[Decimal]) -> EstimateResult<StockCut> {
    validate_quantity(run_ft)?;
    if stock_lengths_ft.is_empty() {
        return Err(EstimateError::invalid_quantity(
            "stock_lengths_ft",
            "[]",
            "At least one stock length is required",
        ));
    }
    for length in stock_lengths_ft {
        validate_package(*length)?;
    }

    let mut lengths: Vec<Decimal> = stock_lengths_ft.to_vec();
    lengths.sort();
    lengths.dedup();

    if run_ft.is_zero() {
        return Ok(StockCut::default());
    }

    let longest = lengths[lengths.len() - 1];
    let mut full_boards = (checked_quotient("run_ft", run_ft, longest)?.ceil() - Decimal::ONE).max(Decimal::ZERO);
    let mut remainder = run_ft - checked_product("run_ft", full_boards, longest)?;
    while remainder > longest {
        full_boards += Decimal::ONE;
        remainder -= longest;
    }

    let mut counts: Vec<(Decimal, u32)> = Vec::new();
    let full_count = decimal_to_count(full_boards)?;
    if full_count > 0 {
        counts.push((longest, full_count));
    }

    if remainder > Decimal::ZERO {
        // Always found: remainder <= longest
        let last = lengths
            .iter()
            .copied()
            .find(|len| *len >= remainder)
            .unwrap_or(longest);
        match counts.iter_mut().find(|(len, _)| *len == last) {
            Some(entry) => {
                entry.1 = entry.1.checked_add(1).ok_or_else(|| too_many_boards(run_ft))?;
            }
            None => counts.push((last, 1)),
        }
    }

    let total_length_ft = counts.iter().try_fold(Decimal::ZERO, |total, (len, count)| {
        let boards = checked_product("run_ft", *len, Decimal::from(*count))?;
        checked_sum("run_ft", total, boards)
    })?;

    Ok(StockCut {
        pieces: counts
            .into_iter()
            .map(|(length_ft, count)| StockPiece { length_ft, count })
            .collect(),
        total_length_ft,
    })
}

fn decimal_to_count(value: Decimal) -> EstimateResult<u32> {
    value.trunc().to_u32().ok_or_else(|| too_many_boards(value))
}

fn too_many_boards(value: Decimal) -> EstimateError {
    EstimateError::invalid_quantity("run_ft", value.to_string(), "Run is too long to cut")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn standard_lengths() -> Vec<Decimal> {
        STANDARD_STOCK_LENGTHS_FT.iter().map(|l| Decimal::from(*l)).collect()
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(round_up_to_package(dec!(240), dec!(20)).unwrap(), dec!(240));
        assert_eq!(packages_needed(dec!(240), dec!(20)).unwrap(), dec!(12));
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(round_up_to_package(dec!(241), dec!(20)).unwrap(), dec!(260));
        assert_eq!(round_up_to_package(dec!(0.9923), dec!(1)).unwrap(), dec!(1));
        assert_eq!(packages_needed(dec!(2.0001), dec!(1)).unwrap(), dec!(3));
    }

    #[test]
    fn test_fractional_package() {
        // 80 lb concrete bag yields 0.6 cu ft
        assert_eq!(packages_needed(dec!(1.2), dec!(0.6)).unwrap(), dec!(2));
        assert_eq!(round_up_to_package(dec!(1.21), dec!(0.6)).unwrap(), dec!(1.8));
    }

    #[test]
    fn test_zero_quantity() {
        assert_eq!(round_up_to_package(Decimal::ZERO, dec!(20)).unwrap(), Decimal::ZERO);
        assert_eq!(packages_needed(Decimal::ZERO, dec!(1)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = round_up_to_package(dec!(-1), dec!(1)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUANTITY");
        assert!(round_up_to_package(dec!(1), Decimal::ZERO).is_err());
        assert!(round_up_to_package(dec!(1), dec!(-5)).is_err());
    }

    #[test]
    fn test_stock_lengths_short_run() {
        let cut = round_up_to_stock_lengths(dec!(9), &standard_lengths()).unwrap();
        assert_eq!(cut.pieces, vec![StockPiece { length_ft: dec!(10), count: 1 }]);
        assert_eq!(cut.total_length_ft, dec!(10));
    }

    #[test]
    fn test_stock_lengths_long_run() {
        // 52 ft: three 16s (48) then 4 ft remaining -> one 8
        let cut = round_up_to_stock_lengths(dec!(52), &standard_lengths()).unwrap();
        assert_eq!(
            cut.pieces,
            vec![
                StockPiece { length_ft: dec!(16), count: 3 },
                StockPiece { length_ft: dec!(8), count: 1 },
            ]
        );
        assert_eq!(cut.total_length_ft, dec!(56));
        assert_eq!(cut.piece_count(), 4);
    }

    #[test]
    fn test_stock_lengths_exact_multiple_of_longest() {
        let cut = round_up_to_stock_lengths(dec!(32), &standard_lengths()).unwrap();
        assert_eq!(cut.pieces, vec![StockPiece { length_ft: dec!(16), count: 2 }]);
        assert_eq!(cut.total_length_ft, dec!(32));
    }

    #[test]
    fn test_stock_lengths_remainder_matches_longest() {
        // 30 ft: one 16 then 14 ft remaining -> another 16, merged
        let cut = round_up_to_stock_lengths(dec!(30), &standard_lengths()).unwrap();
        assert_eq!(cut.pieces, vec![StockPiece { length_ft: dec!(16), count: 2 }]);
    }

    #[test]
    fn test_stock_lengths_unsorted_table() {
        let lengths = vec![dec!(12), dec!(8), dec!(16), dec!(10), dec!(8)];
        let cut = round_up_to_stock_lengths(dec!(11.5), &lengths).unwrap();
        assert_eq!(cut.pieces, vec![StockPiece { length_ft: dec!(12), count: 1 }]);
    }

    #[test]
    fn test_stock_lengths_invalid() {
        assert!(round_up_to_stock_lengths(dec!(10), &[]).is_err());
        assert!(round_up_to_stock_lengths(dec!(10), &[dec!(0)]).is_err());
        assert!(round_up_to_stock_lengths(dec!(-1), &standard_lengths()).is_err());
        assert_eq!(
            round_up_to_stock_lengths(Decimal::ZERO, &standard_lengths()).unwrap(),
            StockCut::default()
        );
    }

    #[test]
    fn test_package_count_out_of_range() {
        let huge = dec!(70000000000000000000000000000);
        let err = packages_needed(huge, dec!(0.5)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUANTITY");
        assert!(err.to_string().contains("Quantity too large"));
        assert!(round_up_to_package(huge, dec!(0.5)).is_err());
        assert!(round_up_to_package(Decimal::MAX, dec!(2)).is_err());
    }

    #[test]
    fn test_stock_lengths_too_many_boards() {
        let err = round_up_to_stock_lengths(dec!(70000000000000000000000000000), &standard_lengths()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUANTITY");
        assert!(round_up_to_stock_lengths(dec!(1000), &[dec!(0.0000000000000000000000000001)]).is_err());
    }

    proptest! {
        #[test]
        fn prop_package_is_smallest_covering_multiple(
            x_cents in 0u64..10_000_000,
            p_cents in 1u64..100_000,
        ) {
            let x = Decimal::new(x_cents as i64, 2);
            let p = Decimal::new(p_cents as i64, 2);
            let y = round_up_to_package(x, p).unwrap();

            prop_assert!(y >= x);
            prop_assert!((y % p).is_zero());
            if !x.is_zero() {
                prop_assert!(y - p < x);
            } else {
                prop_assert!(y.is_zero());
            }
        }

        #[test]
        fn prop_stock_cut_covers_run(run_tenths in 0u64..50_000) {
            let run = Decimal::new(run_tenths as i64, 1);
            let cut = round_up_to_stock_lengths(run, &standard_lengths()).unwrap();

            prop_assert!(cut.total_length_ft >= run);
            // Waste never exceeds the shortest board that could cover the tail
            prop_assert!(cut.total_length_ft - run < dec!(16));
        }
    }
}
