use std::sync::Arc;

use crate::{
    api::customers::require_customer_sheet,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use sentra_ai::{ComposeRequest, ComposedMessage};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComposeBody {
    customer_id: String,
    template_id: String,
}

/// Drafts one message for one customer. Manual templates render locally;
/// AI templates go through the generative endpoint.
async fn compose_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ComposeBody>,
) -> ApiResult<Json<ComposedMessage>> {
    require_customer_sheet(&state)?;
    let customers = state.customer_service.load_customers().await?;
    let customer = customers
        .iter()
        .find(|c| c.id == body.customer_id)
        .ok_or_else(|| ApiError::not_found(format!("customer '{}'", body.customer_id)))?;
    let template = state.template_service.get_template(&body.template_id).await?;

    let config = state.app_config.read().unwrap().agenda_config();
    let today = chrono::Local::now().date_naive();
    let message = state
        .composer
        .compose(ComposeRequest {
            customer,
            template: &template,
            config: &config,
            today,
        })
        .await?;
    Ok(Json(message))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/compose", post(compose_message))
}
