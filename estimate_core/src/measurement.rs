//! # Room Measurements
//!
//! The dimensions a vision-analysis step extracts from room photos. The
//! engine treats a [`RoomMeasurement`] as read-only input; strategies pull
//! derived geometry (wall area, floor area, perimeter) from it and report a
//! `MissingMeasurement` error naming the field when something they need
//! was not detected.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Bedroom",
//!   "length_ft": 12,
//!   "width_ft": 10,
//!   "ceiling_height_ft": 8,
//!   "door_count": 1,
//!   "window_count": 2,
//!   "shape": "rectangular",
//!   "ceiling": "standard"
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::{checked_product, checked_sum, Feet, SqFt};

/// Floor plan shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomShape {
    #[default]
    Rectangular,
    Irregular,
}

/// Ceiling style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingType {
    #[default]
    Standard,
    /// Vaulted or otherwise high ceiling
    Vaulted,
}

/// Measured dimensions of one room or area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomMeasurement {
    /// Optional room name for reports ("Kitchen", "Back deck")
    pub label: Option<String>,

    /// Room length (ft)
    pub length_ft: Option<Decimal>,

    /// Room width (ft)
    pub width_ft: Option<Decimal>,

    /// Gross wall area (sq ft), used when length/width/height are unknown
    pub wall_area_sqft: Option<Decimal>,

    /// Floor area (sq ft), used in preference to length × width
    pub floor_area_sqft: Option<Decimal>,

    /// Ceiling height (ft)
    pub ceiling_height_ft: Option<Decimal>,

    /// Perimeter (ft), used in preference to 2 × (length + width)
    pub perimeter_ft: Option<Decimal>,

    /// Number of doors
    pub door_count: u32,

    /// Number of windows
    pub window_count: u32,

    /// Rectangular or irregular floor plan
    pub shape: RoomShape,

    /// Standard or vaulted ceiling
    pub ceiling: CeilingType,

    /// Obstacle signal from vision analysis; overrides the door/window rule
    pub has_obstacles: Option<bool>,
}

impl RoomMeasurement {
    /// A rectangular room from its plan dimensions and ceiling height.
    pub fn rectangular(length_ft: Decimal, width_ft: Decimal, ceiling_height_ft: Decimal) -> Self {
        RoomMeasurement {
            length_ft: Some(length_ft),
            width_ft: Some(width_ft),
            ceiling_height_ft: Some(ceiling_height_ft),
            ..Default::default()
        }
    }

    /// An area known only by its floor area (a slab, a deck, a floor).
    pub fn with_floor_area(floor_area_sqft: Decimal) -> Self {
        RoomMeasurement {
            floor_area_sqft: Some(floor_area_sqft),
            ..Default::default()
        }
    }

    /// Set door and window counts.
    pub fn with_openings(mut self, doors: u32, windows: u32) -> Self {
        self.door_count = doors;
        self.window_count = windows;
        self
    }

    /// Set the floor plan shape.
    pub fn with_shape(mut self, shape: RoomShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the ceiling style.
    pub fn with_ceiling(mut self, ceiling: CeilingType) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Reject negative dimensions.
    pub fn validate(&self) -> EstimateResult<()> {
        let fields = [
            ("length_ft", self.length_ft),
            ("width_ft", self.width_ft),
            ("wall_area_sqft", self.wall_area_sqft),
            ("floor_area_sqft", self.floor_area_sqft),
            ("ceiling_height_ft", self.ceiling_height_ft),
            ("perimeter_ft", self.perimeter_ft),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(EstimateError::invalid_quantity(
                        field,
                        v.to_string(),
                        "Dimension cannot be negative",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Gross wall area: 2 × (length + width) × ceiling height, or the
    /// measured wall area when plan dimensions are incomplete.
    ///
    /// # Errors
    ///
    /// `MissingMeasurement` when neither source is present, `InvalidQuantity`
    /// when the dimensions are too large to multiply out.
    pub fn gross_wall_area(&self, material: &str) -> EstimateResult<SqFt> {
        match (self.length_ft, self.width_ft, self.ceiling_height_ft) {
            (Some(l), Some(w), Some(h)) => {
                let perimeter = plan_perimeter(l, w, "wall_area_sqft")?;
                checked_product("wall_area_sqft", perimeter, h).map(SqFt)
            }
            _ => self
                .wall_area_sqft
                .map(SqFt)
                .ok_or_else(|| EstimateError::missing_measurement(material, "wall_area_sqft")),
        }
    }

    /// Floor area: the measured value, or length × width.
    pub fn floor_area(&self, material: &str) -> EstimateResult<SqFt> {
        if let Some(area) = self.floor_area_sqft {
            return Ok(SqFt(area));
        }
        match (self.length_ft, self.width_ft) {
            (Some(l), Some(w)) => Feet(l).checked_area(Feet(w), "floor_area_sqft"),
            _ => Err(EstimateError::missing_measurement(material, "floor_area_sqft")),
        }
    }

    /// Perimeter: the measured value, or 2 × (length + width).
    pub fn perimeter(&self, material: &str) -> EstimateResult<Feet> {
        if let Some(p) = self.perimeter_ft {
            return Ok(Feet(p));
        }
        match (self.length_ft, self.width_ft) {
            (Some(l), Some(w)) => plan_perimeter(l, w, "perimeter_ft").map(Feet),
            _ => Err(EstimateError::missing_measurement(material, "perimeter_ft")),
        }
    }

    /// Combined door and window count, saturating at `u32::MAX`
    pub fn opening_count(&self) -> u32 {
        self.door_count.saturating_add(self.window_count)
    }

    /// Whether the room has obstacles. An explicit vision signal wins;
    /// otherwise openings above `threshold` count as obstacles.
    pub fn has_obstacles(&self, threshold: u32) -> bool {
        self.has_obstacles.unwrap_or(self.opening_count() > threshold)
    }

    /// Vaulted, or taller than `threshold_ft`.
    pub fn is_high_ceiling(&self, threshold_ft: Decimal) -> bool {
        self.ceiling == CeilingType::Vaulted
            || self.ceiling_height_ft.is_some_and(|h| h > threshold_ft)
    }

    /// Irregular floor plan
    pub fn is_irregular(&self) -> bool {
        self.shape == RoomShape::Irregular
    }
}

/// 2 × (length + width)
fn plan_perimeter(length: Decimal, width: Decimal, field: &str) -> EstimateResult<Decimal> {
    let sides = checked_sum(field, length, width)?;
    checked_product(field, Decimal::TWO, sides)
}
