use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::info;

use crate::models::ExpenseResponse;
use crate::services::expense_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_expenses))
}

async fn get_expenses(State(state): State<AppState>) -> Json<ExpenseResponse> {
    info!("GET /expenses - Generating expense dashboard");
    let now = Utc::now();
    Json(state.with_rng(|rng| expense_service::build_expense_report(rng, now)))
}
