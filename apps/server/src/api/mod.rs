use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod agenda;
mod analytics;
mod compose;
mod customers;
mod health;
mod plans;
mod settings;
mod templates;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(customers::router())
        .merge(agenda::router())
        .merge(analytics::router())
        .merge(plans::router())
        .merge(templates::router())
        .merge(compose::router())
        .merge(settings::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
