//! # Estimation Engine
//!
//! Turns an [`EstimationRequest`] into a [`ShoppingList`]:
//!
//! 1. Validate the request (fails the whole call on bad top-level input)
//! 2. For each material, run its strategy per room and sum the base
//!    quantities across rooms
//! 3. Resolve the waste factor from the material's base rate, the skill
//!    level and the complexity flags of all rooms
//! 4. Apply waste once to the summed quantity, then round up to whole
//!    packages or stock-length boards
//! 5. Attach prices from the caller's [`PriceLookup`]
//!
//! Quantities are summed before waste and rounding. Rounding each room and
//! then adding would buy a partial package per room.
//!
//! A material that fails (missing measurement, bad override, a quantity
//! too large to represent) becomes a [`MaterialFailure`] and the remaining
//! materials are still estimated. All arithmetic on caller-supplied values
//! is checked, so oversized input fails one material instead of panicking.
//!
//! The engine is pure: no I/O, no caching, no state between calls.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::engine::estimate;
//! use estimate_core::measurement::RoomMeasurement;
//! use estimate_core::request::{EstimationRequest, ProjectType};
//! use estimate_core::waste::SkillLevel;
//! use rust_decimal_macros::dec;
//!
//! let room = RoomMeasurement::rectangular(dec!(12), dec!(10), dec!(8)).with_openings(1, 2);
//! let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Beginner, room);
//!
//! let list = estimate(&request).unwrap();
//! assert_eq!(list.items[0].actual_purchase_quantity, dec!(1));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

use crate::config::EstimatorConfig;
use crate::errors::{EstimateError, EstimateResult};
use crate::materials::{MaterialCategory, QuantityScope, StrategyOutput};
use crate::measurement::RoomMeasurement;
use crate::pricing::{NoPrices, PriceLookup};
use crate::request::EstimationRequest;
use crate::rounding::{packages_needed, round_up_to_stock_lengths, RoundingPolicy, StockPiece};
use crate::shopping_list::{MaterialFailure, ShoppingList, ShoppingListItem};
use crate::units::{checked_product, checked_sum};
use crate::waste::{resolve_waste_factor, ComplexityFlags};

/// Estimate with the default configuration and no prices.
pub fn estimate(request: &EstimationRequest) -> EstimateResult<ShoppingList> {
    Estimator::default().estimate(request, &NoPrices)
}

/// Configured estimation engine. Holds only configuration, so one instance
/// can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Estimator { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Produce a shopping list for `request`, pricing lines from `prices`.
    ///
    /// # Errors
    ///
    /// Only for unusable top-level input: no rooms, a negative measurement,
    /// a bad override, or an invalid configuration. Per-material problems
    /// are returned in [`ShoppingList::failures`].
    pub fn estimate<P: PriceLookup + ?Sized>(
        &self,
        request: &EstimationRequest,
        prices: &P,
    ) -> EstimateResult<ShoppingList> {
        self.config.validate()?;
        request.validate()?;

        let materials = request.resolved_materials();
        info!(
            event = "estimate_start",
            project_type = %request.project_type,
            skill = %request.skill_level,
            rooms = request.rooms.len(),
            materials = materials.len(),
        );

        let complexity = self.complexity(&request.rooms);
        let mut items = Vec::new();
        let mut failures = Vec::new();
        let mut warnings = Vec::new();
        let mut running_total = Decimal::ZERO;

        for category in materials {
            let estimated = self
                .estimate_material(category, request, complexity, prices)
                .and_then(|item| match item {
                    Some(item) => add_to_total(&mut running_total, item).map(Some),
                    None => Ok(None),
                });
            match estimated {
                Ok(Some(item)) => {
                    if let Some(warning) = item.waste.warning(&item.material_name) {
                        warnings.push(warning);
                    }
                    items.push(item);
                }
                Ok(None) => {
                    debug!(event = "material_omitted", material = category.display_name(), reason = "zero quantity");
                }
                Err(failure) => {
                    warn!(
                        event = "material_failed",
                        material = %failure.material,
                        code = failure.error.error_code(),
                        error = %failure.error,
                    );
                    failures.push(failure);
                }
            }
        }

        let list = ShoppingList::from_parts(items, failures, warnings);
        info!(
            event = "estimate_end",
            items = list.items.len(),
            failures = list.failures.len(),
            total = %list.total_estimated_cost,
            pricing_complete = list.pricing_complete,
        );
        Ok(list)
    }

    /// Complexity flags for a set of rooms: a flag is set if any room sets it.
    pub fn complexity(&self, rooms: &[RoomMeasurement]) -> ComplexityFlags {
        rooms.iter().fold(ComplexityFlags::default(), |flags, room| {
            flags.union(ComplexityFlags::new(
                room.is_irregular(),
                room.has_obstacles(self.config.obstacle_threshold),
                room.is_high_ceiling(self.config.high_ceiling_threshold_ft),
            ))
        })
    }

    /// Strategy output for one material with quantities summed over rooms.
    fn combined_output(
        &self,
        category: MaterialCategory,
        request: &EstimationRequest,
    ) -> Result<StrategyOutput, MaterialFailure> {
        let mut combined: Option<StrategyOutput> = None;

        for (index, room) in request.rooms.iter().enumerate() {
            let output = category
                .base_quantity(room, &request.overrides, &self.config)
                .map_err(|error| failure(category, Some(index), error))?;

            combined = Some(match combined.take() {
                None => output,
                Some(mut total) => {
                    if total.scope == QuantityScope::PerRoom {
                        total.base_quantity =
                            checked_sum("base_quantity", total.base_quantity, output.base_quantity)
                                .map_err(|error| failure(category, Some(index), error))?;
                    }
                    total
                }
            });
        }

        combined.ok_or_else(|| {
            failure(
                category,
                None,
                EstimateError::invalid_input("rooms", "[]", "At least one room measurement is required"),
            )
        })
    }

    fn estimate_material<P: PriceLookup + ?Sized>(
        &self,
        category: MaterialCategory,
        request: &EstimationRequest,
        complexity: ComplexityFlags,
        prices: &P,
    ) -> Result<Option<ShoppingListItem>, MaterialFailure> {
        let output = self.combined_output(category, request)?;
        if output.base_quantity.is_zero() {
            return Ok(None);
        }

        let waste = resolve_waste_factor(
            output.base_rate,
            request.skill_level,
            complexity,
            self.config.max_waste_factor,
        )
        .map_err(|error| failure(category, None, error))?;

        let adjusted_quantity = checked_product("adjusted_quantity", output.base_quantity, waste.quantity_multiplier())
            .map_err(|error| failure(category, None, error))?;
        let (actual_purchase_quantity, purchased_coverage, stock_pieces) = self
            .round_for_purchase(&output, adjusted_quantity)
            .map_err(|error| failure(category, None, error))?;

        let material_name = category.display_name();
        let unit_price = prices.unit_price(material_name, output.purchase_unit);
        let estimated_total_cost = unit_price
            .map(|price| checked_product("estimated_total_cost", actual_purchase_quantity, price).map(to_cents))
            .transpose()
            .map_err(|error| failure(category, None, error))?;

        debug!(
            event = "material_estimated",
            material = material_name,
            base = %output.base_quantity,
            waste = %waste.value,
            purchase = %actual_purchase_quantity,
            unit = %output.purchase_unit,
        );

        Ok(Some(ShoppingListItem {
            material_name: material_name.to_string(),
            category,
            calculated_quantity: output.base_quantity,
            base_unit: output.base_unit,
            waste_factor_percent: waste.percent(),
            waste,
            adjusted_quantity,
            purchased_coverage,
            actual_purchase_quantity,
            unit_of_measure: output.purchase_unit,
            package_size: output.package_size,
            stock_pieces,
            unit_price,
            estimated_total_cost,
        }))
    }

    /// Purchase quantity, the coverage it buys, and the board list for
    /// stock-length materials.
    fn round_for_purchase(
        &self,
        output: &StrategyOutput,
        adjusted_quantity: Decimal,
    ) -> EstimateResult<(Decimal, Decimal, Option<Vec<StockPiece>>)> {
        match output.rounding {
            RoundingPolicy::PackageMultiple => {
                let count = packages_needed(adjusted_quantity, output.package_size)?;
                let coverage = checked_product("purchased_coverage", count, output.package_size)?;
                Ok((count, coverage, None))
            }
            RoundingPolicy::StockLengths => {
                let cut = round_up_to_stock_lengths(adjusted_quantity, &self.config.stock_lengths_ft)?;
                Ok((cut.total_length_ft, cut.total_length_ft, Some(cut.pieces)))
            }
        }
    }
}

fn failure(category: MaterialCategory, room_index: Option<usize>, error: EstimateError) -> MaterialFailure {
    MaterialFailure {
        material: category.display_name().to_string(),
        category,
        room_index,
        error,
    }
}

/// Add a priced item's cost to the list total. An item whose cost cannot
/// be added fails on its own so the total stays exact.
fn add_to_total(total: &mut Decimal, item: ShoppingListItem) -> Result<ShoppingListItem, MaterialFailure> {
    if let Some(cost) = item.estimated_total_cost {
        *total = checked_sum("total_estimated_cost", *total, cost).map_err(|error| failure(item.category, None, error))?;
    }
    Ok(item)
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialOverrides, TilePattern};
    use crate::measurement::{CeilingType, RoomShape};
    use crate::pricing::PriceBook;
    use crate::request::ProjectType;
    use crate::units::Unit;
    use crate::waste::SkillLevel;
    use rust_decimal_macros::dec;

    fn bedroom() -> RoomMeasurement {
        RoomMeasurement::rectangular(dec!(12), dec!(10), dec!(8)).with_openings(1, 2)
    }

    fn flooring_request(rooms: Vec<RoomMeasurement>) -> EstimationRequest {
        EstimationRequest {
            project_type: ProjectType::Flooring,
            skill_level: SkillLevel::Intermediate,
            rooms,
            materials: Vec::new(),
            overrides: MaterialOverrides::default(),
        }
    }

    #[test]
    fn test_paint_scenario() {
        let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Beginner, bedroom());
        let list = estimate(&request).unwrap();

        assert_eq!(list.items.len(), 1);
        let paint = &list.items[0];
        assert_eq!(paint.material_name, "Interior Paint");
        assert_eq!(paint.calculated_quantity, dec!(302) / dec!(350));
        assert_eq!(paint.calculated_quantity.round_dp(4), dec!(0.8629));
        assert_eq!(paint.waste.value, dec!(0.15));
        assert_eq!(paint.waste_factor_percent, dec!(15));
        assert_eq!(paint.adjusted_quantity.round_dp(4), dec!(0.9923));
        assert_eq!(paint.actual_purchase_quantity, dec!(1));
        assert_eq!(paint.unit_of_measure, Unit::Gallons);
        assert!(!paint.waste.clamped);
        assert!(list.warnings.is_empty());
    }

    #[test]
    fn test_flooring_pattern_scenario() {
        let mut request = flooring_request(vec![RoomMeasurement::with_floor_area(dec!(200))]);
        request.overrides.pattern_matching = true;
        request.overrides.sqft_per_box = Some(dec!(20));

        let list = estimate(&request).unwrap();
        let flooring = list.item(MaterialCategory::Flooring).unwrap();

        assert_eq!(flooring.waste.base_rate, dec!(0.20));
        assert_eq!(flooring.waste.value, dec!(0.20));
        assert_eq!(flooring.adjusted_quantity, dec!(240));
        assert_eq!(flooring.actual_purchase_quantity, dec!(12));
        assert_eq!(flooring.purchased_coverage, dec!(240));
        assert_eq!(flooring.unit_of_measure, Unit::Boxes);
    }

    #[test]
    fn test_clamped_tile_scenario() {
        let room = RoomMeasurement::with_floor_area(dec!(100))
            .with_openings(2, 2)
            .with_shape(RoomShape::Irregular)
            .with_ceiling(CeilingType::Vaulted);
        let mut request = EstimationRequest::new(ProjectType::Tiling, SkillLevel::Beginner, room)
            .with_materials(vec![MaterialCategory::Tile]);
        request.overrides.tile_pattern = TilePattern::Diagonal;

        let list = estimate(&request).unwrap();
        let tile = list.item(MaterialCategory::Tile).unwrap();

        assert_eq!(tile.waste.raw_value, dec!(0.6825));
        assert_eq!(tile.waste.value, dec!(0.60));
        assert!(tile.waste.clamped);
        assert_eq!(tile.adjusted_quantity, dec!(160));
        assert_eq!(tile.actual_purchase_quantity, dec!(16));
        assert_eq!(list.warnings.len(), 1);
        assert_eq!(list.warnings[0].code(), "WASTE_FACTOR_CLAMPED");
    }

    #[test]
    fn test_expert_in_complex_room_not_clamped() {
        let room = RoomMeasurement::with_floor_area(dec!(100))
            .with_openings(2, 2)
            .with_shape(RoomShape::Irregular)
            .with_ceiling(CeilingType::Vaulted);
        let mut request = EstimationRequest::new(ProjectType::Tiling, SkillLevel::Expert, room)
            .with_materials(vec![MaterialCategory::Tile]);
        request.overrides.tile_pattern = TilePattern::Diagonal;

        let list = estimate(&request).unwrap();
        let tile = list.item(MaterialCategory::Tile).unwrap();
        assert_eq!(tile.waste.value, dec!(0.2275));
        assert!(list.warnings.is_empty());
    }

    #[test]
    fn test_rooms_summed_before_rounding() {
        let room = RoomMeasurement::with_floor_area(dec!(110));
        let two_rooms = estimate(&flooring_request(vec![room.clone(), room.clone()])).unwrap();
        let combined = estimate(&flooring_request(vec![RoomMeasurement::with_floor_area(dec!(220))])).unwrap();

        // 220 × 1.10 = 242 sq ft -> 13 boxes
        assert_eq!(two_rooms.items[0].calculated_quantity, dec!(220));
        assert_eq!(two_rooms.items[0].actual_purchase_quantity, dec!(13));
        assert_eq!(
            two_rooms.items[0].actual_purchase_quantity,
            combined.items[0].actual_purchase_quantity
        );

        // 110 × 1.10 = 121 sq ft -> 7 boxes per room, 14 total
        let single = estimate(&flooring_request(vec![room])).unwrap();
        let rounded_then_summed = single.items[0].actual_purchase_quantity * dec!(2);
        assert_eq!(rounded_then_summed, dec!(14));
        assert!(rounded_then_summed > two_rooms.items[0].actual_purchase_quantity);
    }

    #[test]
    fn test_complexity_from_any_room() {
        let estimator = Estimator::default();
        let plain = RoomMeasurement::with_floor_area(dec!(100));
        let busy = RoomMeasurement::with_floor_area(dec!(50)).with_openings(3, 1);
        let tall = RoomMeasurement::rectangular(dec!(10), dec!(10), dec!(12));

        assert_eq!(estimator.complexity(&[plain.clone()]), ComplexityFlags::default());
        assert_eq!(
            estimator.complexity(&[plain.clone(), busy, tall]),
            ComplexityFlags::new(false, true, true)
        );

        // 3 openings is not above the default threshold
        let three = plain.with_openings(1, 2);
        assert!(!estimator.complexity(&[three.clone()]).has_obstacles);
        let strict = Estimator::new(EstimatorConfig::default().with_obstacle_threshold(2));
        assert!(strict.complexity(&[three]).has_obstacles);
    }

    #[test]
    fn test_idempotent() {
        let request = EstimationRequest::new(ProjectType::Tiling, SkillLevel::Beginner, bedroom());
        let prices = PriceBook::new().with_price("Tile", dec!(12.99));
        let estimator = Estimator::default();

        let first = estimator.estimate(&request, &prices).unwrap();
        let second = estimator.estimate(&request, &prices).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_zero_quantity_omitted() {
        let closet = RoomMeasurement {
            wall_area_sqft: Some(dec!(30)),
            door_count: 2,
            ..Default::default()
        };
        let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Expert, closet);
        let list = estimate(&request).unwrap();

        assert!(list.items.is_empty());
        assert!(list.failures.is_empty());
        assert_eq!(list.total_estimated_cost, Decimal::ZERO);
    }

    #[test]
    fn test_partial_failure_keeps_other_materials() {
        let slab = RoomMeasurement::with_floor_area(dec!(150));
        let request = EstimationRequest::new(ProjectType::Flooring, SkillLevel::Expert, slab)
            .with_materials(vec![MaterialCategory::Paint, MaterialCategory::Flooring]);

        let list = estimate(&request).unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].category, MaterialCategory::Flooring);
        assert_eq!(list.failures.len(), 1);
        let failure = &list.failures[0];
        assert_eq!(failure.category, MaterialCategory::Paint);
        assert_eq!(failure.room_index, Some(0));
        assert_eq!(failure.error.error_code(), "MISSING_MEASUREMENT");
    }

    #[test]
    fn test_oversized_area_fails_one_material() {
        let warehouse = RoomMeasurement {
            floor_area_sqft: Some(dec!(70000000000000000000000000000)),
            wall_area_sqft: Some(dec!(400)),
            ..Default::default()
        };
        let mut request = EstimationRequest::new(ProjectType::Flooring, SkillLevel::Intermediate, warehouse)
            .with_materials(vec![MaterialCategory::Flooring, MaterialCategory::Paint]);
        request.overrides.sqft_per_box = Some(dec!(0.5));

        let list = estimate(&request).unwrap();

        assert_eq!(list.failures.len(), 1);
        let failure = &list.failures[0];
        assert_eq!(failure.category, MaterialCategory::Flooring);
        assert_eq!(failure.error.error_code(), "INVALID_QUANTITY");
        assert!(failure.error.to_string().contains("Quantity too large"));

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].category, MaterialCategory::Paint);
        assert_eq!(list.items[0].actual_purchase_quantity, dec!(2));
    }

    #[test]
    fn test_room_sum_out_of_range_names_room() {
        let half = dec!(50000000000000000000000000000);
        let request = flooring_request(vec![
            RoomMeasurement::with_floor_area(half),
            RoomMeasurement::with_floor_area(half),
        ]);

        let list = estimate(&request).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.failures.len(), 1);
        assert_eq!(list.failures[0].room_index, Some(1));
        assert_eq!(list.failures[0].error.error_code(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_total_cost_out_of_range_fails_last_item() {
        let room = RoomMeasurement {
            floor_area_sqft: Some(dec!(200)),
            wall_area_sqft: Some(dec!(400)),
            ..Default::default()
        };
        let request = EstimationRequest::new(ProjectType::Flooring, SkillLevel::Intermediate, room)
            .with_materials(vec![MaterialCategory::Flooring, MaterialCategory::Paint]);
        let prices = PriceBook::new()
            .with_price("Flooring", dec!(5000000000000000000000000000))
            .with_price("Interior Paint", dec!(20000000000000000000000000000));

        let list = Estimator::default().estimate(&request, &prices).unwrap();

        // 11 boxes fit; 2 more gallons would push the total past the Decimal range
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.total_estimated_cost, dec!(55000000000000000000000000000));
        assert_eq!(list.failures.len(), 1);
        assert_eq!(list.failures[0].category, MaterialCategory::Paint);
        assert!(list.failures[0].error.to_string().contains("total_estimated_cost"));
    }

    #[test]
    fn test_opening_count_at_limit() {
        let room = RoomMeasurement::with_floor_area(dec!(200)).with_openings(u32::MAX, 1);
        let list = estimate(&flooring_request(vec![room])).unwrap();

        let flooring = list.item(MaterialCategory::Flooring).unwrap();
        assert_eq!(flooring.waste.complexity_multiplier, dec!(1.2));
        assert!(list.failures.is_empty());
    }

    #[test]
    fn test_failure_reports_failing_room() {
        let request = flooring_request(vec![
            RoomMeasurement::with_floor_area(dec!(100)),
            RoomMeasurement::default(),
        ]);
        let list = estimate(&request).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.failures[0].room_index, Some(1));
    }

    #[test]
    fn test_invalid_request_fails_whole_call() {
        let request = flooring_request(Vec::new());
        assert_eq!(estimate(&request).unwrap_err().error_code(), "INVALID_INPUT");

        let negative = flooring_request(vec![RoomMeasurement::with_floor_area(dec!(-5))]);
        assert_eq!(estimate(&negative).unwrap_err().error_code(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_pricing_and_partial_total() {
        let mut request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Beginner, bedroom());
        request.overrides.include_primer = true;
        let prices = PriceBook::new().with_price("Interior Paint", dec!(34.98));

        let list = Estimator::default().estimate(&request, &prices).unwrap();
        let paint = list.item(MaterialCategory::Paint).unwrap();
        let primer = list.item(MaterialCategory::Primer).unwrap();

        assert_eq!(paint.unit_price, Some(dec!(34.98)));
        assert_eq!(paint.estimated_total_cost, Some(dec!(34.98)));
        // 302 / 300 × 1.15 -> 2 gallons
        assert_eq!(primer.actual_purchase_quantity, dec!(2));
        assert_eq!(primer.estimated_total_cost, None);
        assert_eq!(list.total_estimated_cost, dec!(34.98));
        assert!(list.is_partial());
    }

    #[test]
    fn test_cost_rounded_to_cents() {
        let request = flooring_request(vec![RoomMeasurement::with_floor_area(dec!(200))]);
        let prices = PriceBook::new().with_price("Flooring", dec!(41.995));

        let list = Estimator::default().estimate(&request, &prices).unwrap();
        // 200 × 1.10 = 220 -> 11 boxes; 11 × 41.995 = 461.945
        assert_eq!(list.items[0].estimated_total_cost, Some(dec!(461.95)));
        assert!(!list.is_partial());
    }

    #[test]
    fn test_lumber_uses_stock_lengths_once_per_request() {
        let mut request = EstimationRequest::new(ProjectType::Decking, SkillLevel::Expert, bedroom())
            .with_room(bedroom())
            .with_materials(vec![MaterialCategory::Lumber]);
        request.overrides.linear_feet = Some(dec!(100));

        let list = estimate(&request).unwrap();
        let lumber = list.item(MaterialCategory::Lumber).unwrap();

        // 100 × 1.05 = 105 ft -> six 16s and one 10
        assert_eq!(lumber.calculated_quantity, dec!(100));
        assert_eq!(lumber.adjusted_quantity, dec!(105));
        assert_eq!(lumber.actual_purchase_quantity, dec!(106));
        assert_eq!(lumber.unit_of_measure, Unit::LinearFeet);
        assert_eq!(lumber.board_count(), Some(7));
        assert_eq!(
            lumber.stock_pieces,
            Some(vec![
                StockPiece { length_ft: dec!(16), count: 6 },
                StockPiece { length_ft: dec!(10), count: 1 },
            ])
        );
    }

    #[test]
    fn test_purchase_never_below_adjusted() {
        let mut request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Beginner, bedroom())
            .with_materials(MaterialCategory::ALL.to_vec());
        request.overrides.linear_feet = Some(dec!(37));

        let list = estimate(&request).unwrap();
        assert_eq!(list.items.len(), MaterialCategory::ALL.len());
        for item in &list.items {
            assert!(item.purchased_coverage >= item.adjusted_quantity, "{}", item.material_name);
            assert!(item.adjusted_quantity >= item.calculated_quantity, "{}", item.material_name);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let estimator = Estimator::new(EstimatorConfig::default().with_max_waste_factor(dec!(1.5)));
        let request = flooring_request(vec![RoomMeasurement::with_floor_area(dec!(100))]);
        assert_eq!(estimator.estimate(&request, &NoPrices).unwrap_err().error_code(), "CONFIG_ERROR");
    }
}
