use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::{AnalyticsQuery, AnalyticsResponse};
use crate::services::analytics_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_analytics))
}

async fn get_analytics(
    State(state): State<AppState>,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let Query(params) = query?;
    // groupBy is validated but does not change the aggregation
    let (period, group_by) = params.parse()?;

    info!("GET /analytics - period={} groupBy={:?}", period, group_by);

    let now = Utc::now();
    let response = state.with_rng(|rng| analytics_service::build_analytics(rng, now, period));
    Ok(Json(response))
}
