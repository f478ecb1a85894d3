//! Service traits for daily plans.

use async_trait::async_trait;

use crate::errors::Result;
use crate::plans::{DailyPlan, NewDailyPlan};

/// Service trait for the plan history.
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    /// Lists the plan history, optionally restricted to one officer.
    async fn list_plans(&self, officer: Option<&str>) -> Result<Vec<DailyPlan>>;

    /// Appends a new plan record. Existing records are never mutated.
    async fn create_plan(&self, new_plan: NewDailyPlan) -> Result<DailyPlan>;
}
