//! Slabs and roofs
//!
//! Concrete is calculated as slab volume and bought in 80 lb premix bags.
//! Roofing is the footprint scaled by a pitch factor and bought in
//! three-bundle squares (33.3 sq ft per bundle).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MaterialOverrides, StrategyOutput};
use crate::errors::EstimateResult;
use crate::measurement::RoomMeasurement;
use crate::units::{slab_volume, Unit};

/// Slab thickness when none is given (in)
pub const DEFAULT_SLAB_THICKNESS_IN: Decimal = dec!(4);

/// Yield of one 80 lb bag of concrete mix (cu ft)
pub const CONCRETE_BAG_YIELD_CUFT: Decimal = dec!(0.6);

/// Coverage of one shingle bundle (sq ft)
pub const SHINGLE_BUNDLE_SQFT: Decimal = dec!(33.3);

const CONCRETE_BASE_RATE: Decimal = dec!(0.05);
const ROOFING_BASE_RATE: Decimal = dec!(0.10);

/// Concrete slab volume in cubic feet
pub fn concrete(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let area = room.floor_area(material)?;
    let volume = slab_volume(area, overrides.slab_thickness_in.unwrap_or(DEFAULT_SLAB_THICKNESS_IN))?;

    Ok(StrategyOutput::packaged(
        volume.value(),
        Unit::CubicFeet,
        Unit::Bags,
        CONCRETE_BAG_YIELD_CUFT,
        CONCRETE_BASE_RATE,
    ))
}

/// Roof surface area from the footprint
pub fn roofing(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let footprint = room.floor_area(material)?;
    let roof_area = footprint.checked_scale(overrides.roof_pitch_factor.unwrap_or(Decimal::ONE), "roof_area_sqft")?;

    Ok(StrategyOutput::packaged(
        roof_area.value(),
        Unit::SquareFeet,
        Unit::Bundles,
        SHINGLE_BUNDLE_SQFT,
        ROOFING_BASE_RATE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_default_thickness() {
        // 10 × 12 slab, 4 in thick = 40 cu ft
        let room = RoomMeasurement::rectangular(dec!(10), dec!(12), dec!(0));
        let output = concrete("Concrete", &room, &MaterialOverrides::default()).unwrap();
        assert_eq!(output.base_quantity, dec!(40));
        assert_eq!(output.base_unit, Unit::CubicFeet);
        assert_eq!(output.purchase_unit, Unit::Bags);
        assert_eq!(output.package_size, dec!(0.6));
    }

    #[test]
    fn test_concrete_thick_slab() {
        let room = RoomMeasurement::with_floor_area(dec!(100));
        let overrides = MaterialOverrides {
            slab_thickness_in: Some(dec!(6)),
            ..Default::default()
        };
        let output = concrete("Concrete", &room, &overrides).unwrap();
        assert_eq!(output.base_quantity, dec!(50));
    }

    #[test]
    fn test_roofing_pitch() {
        let room = RoomMeasurement::with_floor_area(dec!(1000));
        let overrides = MaterialOverrides {
            roof_pitch_factor: Some(dec!(1.2)),
            ..Default::default()
        };
        let output = roofing("Roofing", &room, &overrides).unwrap();
        assert_eq!(output.base_quantity, dec!(1200));
        assert_eq!(output.purchase_unit, Unit::Bundles);
        assert_eq!(output.base_rate, dec!(0.10));
    }

    #[test]
    fn test_oversized_footprint() {
        let room = RoomMeasurement::with_floor_area(dec!(70000000000000000000000000000));
        let overrides = MaterialOverrides {
            roof_pitch_factor: Some(dec!(1.2)),
            ..Default::default()
        };
        assert_eq!(
            concrete("Concrete", &room, &overrides).unwrap_err().error_code(),
            "INVALID_QUANTITY"
        );
        assert_eq!(roofing("Roofing", &room, &overrides).unwrap_err().error_code(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_roofing_missing_footprint() {
        let err = roofing("Roofing", &RoomMeasurement::default(), &MaterialOverrides::default()).unwrap_err();
        assert!(err.needs_manual_input());
    }
}
