use std::sync::Arc;

use crate::{api::customers::require_customer_sheet, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use sentra_core::analytics::PortfolioSummary;

async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    require_customer_sheet(&state)?;
    let config = state.app_config.read().unwrap().agenda_config();
    let today = chrono::Local::now().date_naive();
    let summary = state
        .analytics_service
        .portfolio_summary(&config, today)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics/portfolio", get(get_portfolio_summary))
}
