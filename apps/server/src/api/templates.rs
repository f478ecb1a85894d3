use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use sentra_core::templates::MessageTemplate;

async fn get_templates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MessageTemplate>>> {
    let templates = state.template_service.get_templates().await?;
    Ok(Json(templates))
}

/// Saves one template. A stale `revision` comes back as 409; the client
/// must re-read and retry.
async fn save_template(
    State(state): State<Arc<AppState>>,
    Json(template): Json<MessageTemplate>,
) -> ApiResult<Json<MessageTemplate>> {
    let saved = state.template_service.save_template(template).await?;
    Ok(Json(saved))
}

async fn delete_template(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.template_service.delete_template(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/templates", get(get_templates).put(save_template))
        .route("/templates/{id}", delete(delete_template))
}
