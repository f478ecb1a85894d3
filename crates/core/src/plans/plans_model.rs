//! Daily plan domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Target or realized numbers for one officer-day, per activity category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanNumbers {
    pub survey_count: i64,
    pub disbursement_amount: Decimal,
    pub collection_count: i64,
    pub collection_amount: Decimal,
    pub admin_count: i64,
}

/// One officer's plan for one day: targets set in the morning, actuals
/// filled in as the day goes.
///
/// Plans are append-only. A correction is a new record for the same
/// (officer, date); the history keeps both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub id: String,
    pub officer: String,
    pub date: NaiveDate,
    pub targets: PlanNumbers,
    pub actuals: PlanNumbers,
}

/// Input model for recording a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyPlan {
    pub officer: String,
    pub date: NaiveDate,
    pub targets: PlanNumbers,
    #[serde(default)]
    pub actuals: PlanNumbers,
}
