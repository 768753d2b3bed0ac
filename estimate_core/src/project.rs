//! # Projects
//!
//! A `Project` wraps one [`EstimationRequest`] with the metadata a
//! renovation job carries around it: an id, a name, a status, timestamps
//! and an optional budget. Estimating a project runs the engine and compares
//! the shopping list total against the budget.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, id, name, status, timestamps)
//! ├── budget_amount: Option<Decimal>
//! ├── total_actual_cost: Option<Decimal>
//! └── request: EstimationRequest
//! ```
//!
//! Ids and timestamps live here and never in the [`ShoppingList`], so the
//! engine's output stays identical for identical requests.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::engine::Estimator;
//! use estimate_core::measurement::RoomMeasurement;
//! use estimate_core::pricing::PriceBook;
//! use estimate_core::project::{BudgetStatus, Project};
//! use estimate_core::request::{EstimationRequest, ProjectType};
//! use estimate_core::waste::SkillLevel;
//! use rust_decimal_macros::dec;
//!
//! let room = RoomMeasurement::with_floor_area(dec!(200));
//! let request = EstimationRequest::new(ProjectType::Flooring, SkillLevel::Intermediate, room);
//! let project = Project::new("Den floor", request).with_budget(dec!(500));
//!
//! let prices = PriceBook::new().with_price("Flooring", dec!(40));
//! let estimate = project.estimate(&Estimator::default(), &prices).unwrap();
//!
//! // 11 boxes × $40
//! assert_eq!(estimate.budget, BudgetStatus::WithinBudget { remaining: dec!(60) });
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::engine::Estimator;
use crate::errors::{EstimateError, EstimateResult};
use crate::pricing::PriceLookup;
use crate::request::EstimationRequest;
use crate::shopping_list::ShoppingList;

/// Current schema version for serialized projects
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A renovation job and the request that estimates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    /// Spending limit, if the user set one
    pub budget_amount: Option<Decimal>,

    /// What the job actually cost, once known
    pub total_actual_cost: Option<Decimal>,

    pub request: EstimationRequest,
}

impl Project {
    /// Create a draft project.
    pub fn new(name: impl Into<String>, request: EstimationRequest) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                name: name.into(),
                status: ProjectStatus::Draft,
                created: now,
                modified: now,
            },
            budget_amount: None,
            total_actual_cost: None,
            request,
        }
    }

    /// Set the budget (builder style).
    pub fn with_budget(mut self, amount: Decimal) -> Self {
        self.budget_amount = Some(amount);
        self
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.meta.status = status;
        self.touch();
    }

    /// Record the final spend and mark the project completed.
    pub fn complete(&mut self, total_actual_cost: Decimal) {
        self.total_actual_cost = Some(total_actual_cost);
        self.set_status(ProjectStatus::Completed);
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Estimate the project's request and check it against the budget.
    ///
    /// # Errors
    ///
    /// `InvalidQuantity` for a negative budget, plus anything
    /// [`Estimator::estimate`] rejects.
    pub fn estimate<P: PriceLookup + ?Sized>(
        &self,
        estimator: &Estimator,
        prices: &P,
    ) -> EstimateResult<ProjectEstimate> {
        if let Some(budget) = self.budget_amount {
            if budget < Decimal::ZERO {
                return Err(EstimateError::invalid_quantity(
                    "budget_amount",
                    budget.to_string(),
                    "Budget cannot be negative",
                ));
            }
        }

        let shopping_list = estimator.estimate(&self.request, prices)?;
        let budget = BudgetStatus::evaluate(self.budget_amount, shopping_list.total_estimated_cost);
        info!(
            event = "project_estimated",
            project_id = %self.meta.id,
            total = %shopping_list.total_estimated_cost,
            over_budget = budget.is_over(),
        );

        Ok(ProjectEstimate {
            project_id: self.meta.id,
            total_is_partial: shopping_list.is_partial(),
            shopping_list,
            budget,
        })
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    pub name: String,

    pub status: ProjectStatus,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Where a project is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
}

/// Shopping list total compared against the project budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    NoBudget,
    WithinBudget { remaining: Decimal },
    OverBudget { overage: Decimal },
}

impl BudgetStatus {
    /// Compare `total` against an optional budget. Spending exactly the
    /// budget is within it.
    pub fn evaluate(budget: Option<Decimal>, total: Decimal) -> Self {
        match budget {
            None => BudgetStatus::NoBudget,
            Some(limit) if total <= limit => BudgetStatus::WithinBudget { remaining: limit - total },
            Some(limit) => BudgetStatus::OverBudget { overage: total - limit },
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, BudgetStatus::OverBudget { .. })
    }
}

/// A project's shopping list with its budget check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub project_id: Uuid,
    pub shopping_list: ShoppingList,
    pub budget: BudgetStatus,
    /// The compared total leaves out unpriced items
    pub total_is_partial: bool,
}
