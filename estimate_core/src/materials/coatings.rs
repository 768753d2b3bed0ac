//! Wall coatings: paint and primer
//!
//! ```text
//! wall_area = 2 × (length + width) × ceiling_height
//! net_area  = wall_area − doors × 20 − windows × 15
//! gallons   = net_area / coverage_per_gallon × coats
//! ```
//!
//! Door and window areas are fixed allowances, not measured openings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MaterialOverrides, StrategyOutput};
use crate::errors::EstimateResult;
use crate::measurement::RoomMeasurement;
use crate::units::{checked_product, checked_quotient, SqFt, Unit};

/// Wall area deducted per door (sq ft)
pub const DOOR_AREA_SQFT: Decimal = dec!(20);

/// Wall area deducted per window (sq ft)
pub const WINDOW_AREA_SQFT: Decimal = dec!(15);

/// Paint coverage on smooth walls (sq ft/gal)
pub const PAINT_COVERAGE_SMOOTH: Decimal = dec!(350);

/// Paint coverage on textured walls (sq ft/gal)
pub const PAINT_COVERAGE_TEXTURED: Decimal = dec!(250);

/// Primer coverage on smooth walls (sq ft/gal)
pub const PRIMER_COVERAGE_SMOOTH: Decimal = dec!(300);

/// Primer coverage on textured walls (sq ft/gal)
pub const PRIMER_COVERAGE_TEXTURED: Decimal = dec!(200);

const COATING_BASE_RATE: Decimal = dec!(0.10);

/// Wall area left after door and window allowances, never negative.
pub fn net_wall_area(material: &str, room: &RoomMeasurement) -> EstimateResult<SqFt> {
    let gross = room.gross_wall_area(material)?;
    let openings = SqFt(
        Decimal::from(room.door_count) * DOOR_AREA_SQFT + Decimal::from(room.window_count) * WINDOW_AREA_SQFT,
    );
    Ok((gross - openings).non_negative())
}

/// Paint in whole gallons
pub fn paint(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let net = net_wall_area(material, room)?;
    let coverage = overrides.coverage_per_gallon.unwrap_or(if overrides.textured_surface {
        PAINT_COVERAGE_TEXTURED
    } else {
        PAINT_COVERAGE_SMOOTH
    });
    let coats = Decimal::from(overrides.coats.unwrap_or(1));
    let per_coat = checked_quotient("gallons", net.value(), coverage)?;
    let gallons = checked_product("gallons", per_coat, coats)?;

    Ok(StrategyOutput::packaged(gallons, Unit::Gallons, Unit::Gallons, Decimal::ONE, COATING_BASE_RATE))
}

/// Primer in whole gallons, always a single coat
pub fn primer(material: &str, room: &RoomMeasurement, overrides: &MaterialOverrides) -> EstimateResult<StrategyOutput> {
    let net = net_wall_area(material, room)?;
    let coverage = if overrides.textured_surface {
        PRIMER_COVERAGE_TEXTURED
    } else {
        PRIMER_COVERAGE_SMOOTH
    };
    let gallons = checked_quotient("gallons", net.value(), coverage)?;

    Ok(StrategyOutput::packaged(gallons, Unit::Gallons, Unit::Gallons, Decimal::ONE, COATING_BASE_RATE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bedroom() -> RoomMeasurement {
        RoomMeasurement::rectangular(dec!(12), dec!(10), dec!(8)).with_openings(1, 2)
    }

    #[test]
    fn test_net_wall_area() {
        // 352 - 20 - 30
        assert_eq!(net_wall_area("Paint", &bedroom()).unwrap(), SqFt(dec!(302)));
    }

    #[test]
    fn test_net_wall_area_never_negative() {
        let closet = RoomMeasurement {
            wall_area_sqft: Some(dec!(30)),
            door_count: 2,
            ..Default::default()
        };
        assert_eq!(net_wall_area("Paint", &closet).unwrap(), SqFt(Decimal::ZERO));
    }

    #[test]
    fn test_paint_smooth() {
        let output = paint("Paint", &bedroom(), &MaterialOverrides::default()).unwrap();
        assert_eq!(output.base_quantity, dec!(302) / dec!(350));
        assert_eq!(output.base_unit, Unit::Gallons);
        assert_eq!(output.package_size, Decimal::ONE);
        assert_eq!(output.base_rate, dec!(0.10));
    }

    #[test]
    fn test_paint_textured_two_coats() {
        let overrides = MaterialOverrides {
            textured_surface: true,
            coats: Some(2),
            ..Default::default()
        };
        let output = paint("Paint", &bedroom(), &overrides).unwrap();
        assert_eq!(output.base_quantity, dec!(302) / dec!(250) * dec!(2));
    }

    #[test]
    fn test_paint_coverage_override_wins() {
        let overrides = MaterialOverrides {
            textured_surface: true,
            coverage_per_gallon: Some(dec!(400)),
            ..Default::default()
        };
        let output = paint("Paint", &bedroom(), &overrides).unwrap();
        assert_eq!(output.base_quantity, dec!(302) / dec!(400));
    }

    #[test]
    fn test_primer() {
        let output = primer("Primer", &bedroom(), &MaterialOverrides::default()).unwrap();
        assert_eq!(output.base_quantity, dec!(302) / dec!(300));
    }

    #[test]
    fn test_paint_gallons_out_of_range() {
        let warehouse = RoomMeasurement {
            wall_area_sqft: Some(dec!(70000000000000000000000000000)),
            ..Default::default()
        };
        let overrides = MaterialOverrides {
            coverage_per_gallon: Some(dec!(0.5)),
            ..Default::default()
        };
        let err = paint("Paint", &warehouse, &overrides).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUANTITY");
        assert!(err.to_string().contains("Quantity too large"));
    }

    #[test]
    fn test_paint_missing_walls() {
        let slab = RoomMeasurement::with_floor_area(dec!(100));
        let err = paint("Interior Paint", &slab, &MaterialOverrides::default()).unwrap_err();
        assert!(err.needs_manual_input());
    }
}
