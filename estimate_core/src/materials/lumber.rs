//! Linear materials: decking, lumber and fencing
//!
//! Decking and lumber are measured in linear feet and bought as boards of
//! standard stock lengths (see [`crate::rounding::round_up_to_stock_lengths`]).
//! Fencing is bought as 8 ft panels.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MaterialOverrides, StrategyOutput};
use crate::errors::{EstimateError, EstimateResult};
use crate::measurement::RoomMeasurement;
use crate::units::Unit;

/// Length of one prefabricated fence panel (ft)
pub const FENCE_PANEL_LENGTH_FT: Decimal = dec!(8);

const BOARD_BASE_RATE: Decimal = dec!(0.10);
const FENCING_BASE_RATE: Decimal = dec!(0.05);

/// Deck boards: the requested run, or the area's perimeter
pub fn decking(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    match overrides.linear_feet {
        Some(feet) => Ok(StrategyOutput::stock_lengths(feet, BOARD_BASE_RATE).per_request()),
        None => {
            let perimeter = room.perimeter(material)?;
            Ok(StrategyOutput::stock_lengths(perimeter.value(), BOARD_BASE_RATE))
        }
    }
}

/// General lumber: only an explicit run can be estimated
pub fn lumber(material: &str, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let run = overrides
        .linear_feet
        .ok_or_else(|| EstimateError::missing_measurement(material, "linear_feet"))?;
    Ok(StrategyOutput::stock_lengths(run, BOARD_BASE_RATE).per_request())
}

/// Fence panels along the fence run, or the area's perimeter
pub fn fencing(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let output = |run: Decimal| {
        StrategyOutput::packaged(run, Unit::LinearFeet, Unit::Pieces, FENCE_PANEL_LENGTH_FT, FENCING_BASE_RATE)
    };
    match overrides.fence_length_ft {
        Some(feet) => Ok(output(feet).per_request()),
        None => Ok(output(room.perimeter(material)?.value())),
    }
}
