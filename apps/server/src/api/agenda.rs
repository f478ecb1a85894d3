use std::sync::Arc;

use crate::{api::customers::require_customer_sheet, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use sentra_core::agenda::FollowUp;

async fn get_agenda(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FollowUp>>> {
    require_customer_sheet(&state)?;
    let config = state.app_config.read().unwrap().agenda_config();
    let today = chrono::Local::now().date_naive();
    let items = state.agenda_service.build_agenda(&config, today).await?;
    Ok(Json(items))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/agenda", get(get_agenda))
}
