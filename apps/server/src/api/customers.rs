use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sentra_core::customers::{Customer, CustomerUpdate};

pub(crate) fn require_customer_sheet(state: &AppState) -> Result<(), ApiError> {
    if state.app_config.read().unwrap().customer_sheet_enabled {
        Ok(())
    } else {
        Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "customer sheet is disabled",
        ))
    }
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CustomerFilter {
    officer: Option<String>,
    sentra: Option<String>,
    search: Option<String>,
}

async fn get_customers(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CustomerFilter>,
) -> ApiResult<Json<Vec<Customer>>> {
    require_customer_sheet(&state)?;
    let mut customers = state.customer_service.load_customers().await?;
    if let Some(officer) = filter.officer.as_deref() {
        customers.retain(|c| c.officer.eq_ignore_ascii_case(officer));
    }
    if let Some(sentra) = filter.sentra.as_deref() {
        customers.retain(|c| c.sentra.eq_ignore_ascii_case(sentra));
    }
    if let Some(search) = filter.search.as_deref() {
        let needle = search.to_lowercase();
        customers.retain(|c| c.name.to_lowercase().contains(&needle));
    }
    Ok(Json(customers))
}

async fn sync_customer(
    State(state): State<Arc<AppState>>,
    Json(update): Json<CustomerUpdate>,
) -> ApiResult<StatusCode> {
    require_customer_sheet(&state)?;
    state.customer_service.push_customer(&update).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(get_customers))
        .route("/customers/sync", post(sync_customer))
}
