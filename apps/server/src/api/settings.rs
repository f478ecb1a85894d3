use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use sentra_core::settings::{AppConfig, AppConfigPatch};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<AppConfig>> {
    let config = state.app_config.read().unwrap().clone();
    Ok(Json(config))
}

/// Persists a patch to the remote override layer, then swaps the shared
/// config wholesale.
async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<AppConfigPatch>,
) -> ApiResult<Json<AppConfig>> {
    let config = state.settings_service.update_config(patch).await?;
    *state.app_config.write().unwrap() = config.clone();
    Ok(Json(config))
}

/// Re-resolves the configuration from the backend.
async fn refresh_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<AppConfig>> {
    let config = state.settings_service.get_config().await?;
    *state.app_config.write().unwrap() = config.clone();
    Ok(Json(config))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings).post(update_settings))
        .route("/settings/refresh", post(refresh_settings))
}
