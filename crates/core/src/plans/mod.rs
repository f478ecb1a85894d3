//! Plans module - daily target/actual records per officer.

mod plans_model;
mod plans_service;
mod plans_traits;

// Re-export the public interface
pub use plans_model::{DailyPlan, NewDailyPlan, PlanNumbers};
pub use plans_service::PlanService;
pub use plans_traits::PlanServiceTrait;
