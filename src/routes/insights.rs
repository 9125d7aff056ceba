use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{InsightsQuery, InsightsResponse};
use crate::services::insights_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_insights))
}

async fn get_insights(
    query: Result<Query<InsightsQuery>, QueryRejection>,
) -> Result<Json<InsightsResponse>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    info!(
        "GET /insights - start={:?} end={:?} category={:?}",
        params.start_date, params.end_date, params.category
    );

    Ok(Json(insights_service::build_insights(&params)))
}
