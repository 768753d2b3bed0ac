//! # estimate_core - Materials Estimation & Waste Calculation Engine
//!
//! `estimate_core` converts room measurements and a few categorical inputs
//! (project type, skill level, complexity) into a purchasable shopping list
//! with waste-adjusted quantities, whole-package purchase amounts and cost
//! projections. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **Exact**: quantities and prices are [`rust_decimal::Decimal`], never floats
//! - **Never round down**: purchases always cover the waste-adjusted need
//! - **Partial results**: one bad material does not sink the estimate
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use estimate_core::{estimate, EstimationRequest, ProjectType, RoomMeasurement, SkillLevel};
//! use rust_decimal_macros::dec;
//!
//! let room = RoomMeasurement::rectangular(dec!(12), dec!(10), dec!(8)).with_openings(1, 2);
//! let request = EstimationRequest::new(ProjectType::Painting, SkillLevel::Beginner, room);
//!
//! let list = estimate(&request).unwrap();
//! let paint = &list.items[0];
//! assert_eq!(paint.waste.value, dec!(0.15));
//! assert_eq!(paint.actual_purchase_quantity, dec!(1));
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Orchestrator: strategies, waste, rounding, pricing
//! - [`materials`] - One calculation strategy per material category
//! - [`waste`] - Waste factor resolution (base rate × skill × complexity)
//! - [`rounding`] - Package and stock-length rounding
//! - [`measurement`] - Room geometry input
//! - [`request`] - Estimation requests and project types
//! - [`shopping_list`] - Output types
//! - [`pricing`] - Price lookup seam
//! - [`project`] - Project container with budget tracking
//! - [`feedback`] - Estimated vs actual usage
//! - [`config`] - Engine settings loaded from TOML
//! - [`units`] - Units of measure and type-safe quantity wrappers
//! - [`errors`] - Structured error and warning types

pub mod config;
pub mod engine;
pub mod errors;
pub mod feedback;
pub mod materials;
pub mod measurement;
pub mod pricing;
pub mod project;
pub mod request;
pub mod rounding;
pub mod shopping_list;
pub mod units;
pub mod waste;

// Re-export commonly used types at crate root for convenience
pub use config::EstimatorConfig;
pub use engine::{estimate, Estimator};
pub use errors::{EstimateError, EstimateResult, EstimateWarning};
pub use materials::{MaterialCategory, MaterialOverrides};
pub use measurement::RoomMeasurement;
pub use pricing::{NoPrices, PriceBook, PriceLookup};
pub use project::{BudgetStatus, Project};
pub use request::{EstimationRequest, ProjectType};
pub use shopping_list::{MaterialFailure, ShoppingList, ShoppingListItem};
pub use waste::{SkillLevel, WasteFactor};
