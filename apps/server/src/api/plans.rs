use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sentra_core::plans::{DailyPlan, NewDailyPlan};

fn require_plan_sheet(state: &AppState) -> Result<(), ApiError> {
    if state.app_config.read().unwrap().plans_sheet_enabled {
        Ok(())
    } else {
        Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "plan sheet is disabled",
        ))
    }
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PlanFilter {
    officer: Option<String>,
}

async fn get_plans(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PlanFilter>,
) -> ApiResult<Json<Vec<DailyPlan>>> {
    require_plan_sheet(&state)?;
    let plans = state
        .plan_service
        .list_plans(filter.officer.as_deref())
        .await?;
    Ok(Json(plans))
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(new_plan): Json<NewDailyPlan>,
) -> ApiResult<Json<DailyPlan>> {
    require_plan_sheet(&state)?;
    let plan = state.plan_service.create_plan(new_plan).await?;
    Ok(Json(plan))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plans", get(get_plans).post(create_plan))
}
