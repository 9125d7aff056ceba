use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{CategorizeRequest, CategorizeResponse};
use crate::services::categorization_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(categorize_transaction))
}

async fn categorize_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CategorizeRequest>, JsonRejection>,
) -> Result<Json<CategorizeResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    info!("POST /categorize - Categorizing merchant '{}'", request.merchant);

    let response = state.with_rng(|rng| {
        categorization_service::classify(rng, &request.merchant, request.amount)
    });
    Ok(Json(response))
}
