use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    info!("GET /health - Health check");
    Json(HealthResponse {
        status: "ok",
        service: state.config.service_name.clone(),
    })
}
