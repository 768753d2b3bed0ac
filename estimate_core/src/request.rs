//! # Estimation Requests
//!
//! An [`EstimationRequest`] bundles everything one estimate needs: the
//! project type, the user's skill level, the measured rooms and any
//! material overrides. It is built per call and never stored by the engine.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "project_type": "painting",
//!   "skill_level": "beginner",
//!   "rooms": [
//!     { "length_ft": 12, "width_ft": 10, "ceiling_height_ft": 8,
//!       "door_count": 1, "window_count": 2 }
//!   ],
//!   "overrides": { "include_primer": true }
//! }
//! ```
//!
//! An unknown `project_type` or `skill_level` fails deserialization, so a
//! request that reaches the engine always has a strategy to dispatch to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::materials::{MaterialCategory, MaterialOverrides};
use crate::measurement::RoomMeasurement;
use crate::waste::SkillLevel;

/// Kind of renovation project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectType {
    Painting,
    Flooring,
    Tiling,
    Drywall,
    Concrete,
    Roofing,
    Decking,
    Fencing,
}

impl ProjectType {
    /// All project types
    pub const ALL: [ProjectType; 8] = [
        ProjectType::Painting,
        ProjectType::Flooring,
        ProjectType::Tiling,
        ProjectType::Drywall,
        ProjectType::Concrete,
        ProjectType::Roofing,
        ProjectType::Decking,
        ProjectType::Fencing,
    ];

    /// Lowercase identifier
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Painting => "painting",
            ProjectType::Flooring => "flooring",
            ProjectType::Tiling => "tiling",
            ProjectType::Drywall => "drywall",
            ProjectType::Concrete => "concrete",
            ProjectType::Roofing => "roofing",
            ProjectType::Decking => "decking",
            ProjectType::Fencing => "fencing",
        }
    }

    /// Materials estimated when the request does not list any
    pub fn default_materials(&self, overrides: &MaterialOverrides) -> Vec<MaterialCategory> {
        match self {
            ProjectType::Painting if overrides.include_primer => {
                vec![MaterialCategory::Primer, MaterialCategory::Paint]
            }
            ProjectType::Painting => vec![MaterialCategory::Paint],
            ProjectType::Flooring => vec![MaterialCategory::Flooring],
            ProjectType::Tiling => vec![MaterialCategory::Tile, MaterialCategory::Grout, MaterialCategory::Thinset],
            ProjectType::Drywall => vec![MaterialCategory::Drywall],
            ProjectType::Concrete => vec![MaterialCategory::Concrete],
            ProjectType::Roofing => vec![MaterialCategory::Roofing],
            ProjectType::Decking => vec![MaterialCategory::Decking],
            ProjectType::Fencing => vec![MaterialCategory::Fencing],
        }
    }
}

impl FromStr for ProjectType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "painting" | "paint" => Ok(ProjectType::Painting),
            "flooring" => Ok(ProjectType::Flooring),
            "tiling" | "tile" => Ok(ProjectType::Tiling),
            "drywall" => Ok(ProjectType::Drywall),
            "concrete" => Ok(ProjectType::Concrete),
            "roofing" => Ok(ProjectType::Roofing),
            "decking" | "deck" => Ok(ProjectType::Decking),
            "fencing" | "fence" => Ok(ProjectType::Fencing),
            _ => Err(EstimateError::UnknownProjectType { value: s.to_string() }),
        }
    }
}

impl TryFrom<String> for ProjectType {
    type Error = EstimateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        project_type.code().to_string()
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Input for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    /// Project type; selects the default material set
    pub project_type: ProjectType,

    /// Skill of whoever does the work
    pub skill_level: SkillLevel,

    /// One or more measured rooms/areas
    pub rooms: Vec<RoomMeasurement>,

    /// Explicit materials; empty means the project type's defaults
    #[serde(default)]
    pub materials: Vec<MaterialCategory>,

    /// Strategy overrides
    #[serde(default)]
    pub overrides: MaterialOverrides,
}

impl EstimationRequest {
    /// A request for one room with the project type's default materials.
    pub fn new(project_type: ProjectType, skill_level: SkillLevel, room: RoomMeasurement) -> Self {
        EstimationRequest {
            project_type,
            skill_level,
            rooms: vec![room],
            materials: Vec::new(),
            overrides: MaterialOverrides::default(),
        }
    }

    /// Add another room.
    pub fn with_room(mut self, room: RoomMeasurement) -> Self {
        self.rooms.push(room);
        self
    }

    /// Replace the overrides.
    pub fn with_overrides(mut self, overrides: MaterialOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Estimate exactly these materials instead of the defaults.
    pub fn with_materials(mut self, materials: Vec<MaterialCategory>) -> Self {
        self.materials = materials;
        self
    }

    /// Materials to estimate, in order, without duplicates.
    pub fn resolved_materials(&self) -> Vec<MaterialCategory> {
        let requested = if self.materials.is_empty() {
            self.project_type.default_materials(&self.overrides)
        } else {
            self.materials.clone()
        };

        let mut seen = Vec::with_capacity(requested.len());
        for material in requested {
            if !seen.contains(&material) {
                seen.push(material);
            }
        }
        seen
    }

    /// Check the request as a whole. Failing here fails the entire estimate.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.rooms.is_empty() {
            return Err(EstimateError::invalid_input(
                "rooms",
                "[]",
                "At least one room measurement is required",
            ));
        }
        for room in &self.rooms {
            room.validate()?;
        }
        self.overrides.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn room() -> RoomMeasurement {
        RoomMeasurement::rectangular(dec!(12), dec!(10), dec!(8))
    }

    #[test]
    fn test_project_type_parsing() {
        for project_type in ProjectType::ALL {
            assert_eq!(project_type.code().parse::<ProjectType>().unwrap(), project_type);
        }
        let err = "kitchen".parse::<ProjectType>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_PROJECT_TYPE");
    }

    #[test]
    fn test_tiling_defaults_include_setting_materials() {
        let request = EstimationRequest::new(ProjectType::Tiling, SkillLevel::Expert, room());
        assert_eq!(
            request.resolved_materials(),
            vec![MaterialCategory::Tile, MaterialCategory::Grout, MaterialCategory::Thinset]
        );
    }

    #[test]
    fn test_primer_added_for_painting() {
        let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Expert, room()).with_overrides(
            MaterialOverrides {
                include_primer: true,
                ..Default::default()
            },
        );
        assert_eq!(
            request.resolved_materials(),
            vec![MaterialCategory::Primer, MaterialCategory::Paint]
        );
    }

    #[test]
    fn test_explicit_materials_deduplicated() {
        let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Expert, room()).with_materials(vec![
            MaterialCategory::Paint,
            MaterialCategory::Drywall,
            MaterialCategory::Paint,
        ]);
        assert_eq!(
            request.resolved_materials(),
            vec![MaterialCategory::Paint, MaterialCategory::Drywall]
        );
    }

    #[test]
    fn test_empty_rooms_rejected() {
        let mut request = EstimationRequest::new(ProjectType::Flooring, SkillLevel::Expert, room());
        request.rooms.clear();
        assert_eq!(request.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_request() {
        let json = r#"{
            "project_type": "painting",
            "skill_level": "beginner",
            "rooms": [{"length_ft": 12, "width_ft": 10, "ceiling_height_ft": 8, "door_count": 1, "window_count": 2}]
        }"#;
        let request: EstimationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.project_type, ProjectType::Painting);
        assert_eq!(request.skill_level, SkillLevel::Beginner);
        assert!(request.materials.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_json_unknown_project_type_fails() {
        let json = r#"{"project_type": "kitchen", "skill_level": "beginner", "rooms": [{}]}"#;
        let err = serde_json::from_str::<EstimationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown project type"));
    }

    #[test]
    fn test_json_unknown_skill_fails() {
        let json = r#"{"project_type": "flooring", "skill_level": "guru", "rooms": [{}]}"#;
        assert!(serde_json::from_str::<EstimationRequest>(json).is_err());
    }
}
