//! Floor and wall surfaces: flooring, tile (with grout and thinset), drywall

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::coatings::net_wall_area;
use super::{MaterialOverrides, StrategyOutput};
use crate::config::EstimatorConfig;
use crate::errors::EstimateResult;
use crate::measurement::RoomMeasurement;
use crate::units::{checked_quotient, Unit};

const FLOORING_BASE_RATE: Decimal = dec!(0.10);

/// Extra base waste for floors that need pattern matching
pub const PATTERN_MATCHING_SURCHARGE: Decimal = dec!(0.10);

/// Tile size (sq ft) when none is given: a 12" × 12" tile
pub const DEFAULT_TILE_SIZE_SQFT: Decimal = dec!(1);

/// Floor area covered by one bag of grout (sq ft)
pub const GROUT_SQFT_PER_BAG: Decimal = dec!(100);

/// Floor area covered by one 50 lb bag of thinset (sq ft)
pub const THINSET_SQFT_PER_BAG: Decimal = dec!(95);

/// Coverage of one 4 × 8 drywall sheet (sq ft)
pub const DRYWALL_SHEET_SQFT: Decimal = dec!(32);

const SETTING_MATERIAL_BASE_RATE: Decimal = dec!(0.10);
const DRYWALL_BASE_RATE: Decimal = dec!(0.12);

/// Flooring by the box. Pattern matching raises the base rate before any
/// skill or complexity multiplier applies.
pub fn flooring(
    material: &str,
    room: &RoomMeasurement,
    overrides: &MaterialOverrides,
    config: &EstimatorConfig,
) -> EstimateResult<StrategyOutput> {
    let area = room.floor_area(material)?;
    let box_size = overrides.sqft_per_box.unwrap_or(config.default_sqft_per_box);
    let base_rate = if overrides.pattern_matching {
        FLOORING_BASE_RATE + PATTERN_MATCHING_SURCHARGE
    } else {
        FLOORING_BASE_RATE
    };

    Ok(StrategyOutput::packaged(area.value(), Unit::SquareFeet, Unit::Boxes, box_size, base_rate))
}

/// Tiles counted individually, bought by the box
pub fn tile(
    material: &str,
    room: &RoomMeasurement,
    overrides: &MaterialOverrides,
    config: &EstimatorConfig,
) -> EstimateResult<StrategyOutput> {
    let area = room.floor_area(material)?;
    let tile_size = overrides.tile_size_sqft.unwrap_or(DEFAULT_TILE_SIZE_SQFT);
    let tiles = checked_quotient("tile_count", area.value(), tile_size)?;
    let per_box = overrides.tiles_per_box.unwrap_or(config.default_tiles_per_box);

    Ok(StrategyOutput::packaged(
        tiles,
        Unit::Tiles,
        Unit::Boxes,
        per_box,
        overrides.tile_pattern.base_rate(),
    ))
}

/// Grout, one bag per 100 sq ft of tiled floor
pub fn grout(material: &str, room: &RoomMeasurement) -> EstimateResult<StrategyOutput> {
    let area = room.floor_area(material)?;
    Ok(StrategyOutput::packaged(
        area.value() / GROUT_SQFT_PER_BAG,
        Unit::Bags,
        Unit::Bags,
        Decimal::ONE,
        SETTING_MATERIAL_BASE_RATE,
    ))
}

/// Thinset mortar at the bag's rated coverage
pub fn thinset(material: &str, room: &RoomMeasurement) -> EstimateResult<StrategyOutput> {
    let area = room.floor_area(material)?;
    Ok(StrategyOutput::packaged(
        area.value() / THINSET_SQFT_PER_BAG,
        Unit::Bags,
        Unit::Bags,
        Decimal::ONE,
        SETTING_MATERIAL_BASE_RATE,
    ))
}

/// Drywall sheets for the net wall area, plus the ceiling when requested
pub fn drywall(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let mut area = net_wall_area(material, room)?;
    if overrides.include_ceiling {
        area = area.checked_add(room.floor_area(material)?, "drywall_area_sqft")?;
    }

    Ok(StrategyOutput::packaged(
        area.value(),
        Unit::SquareFeet,
        Unit::Sheets,
        DRYWALL_SHEET_SQFT,
        DRYWALL_BASE_RATE,
    ))
}
