use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{FileUploadRequest, FileUploadResponse};
use crate::services::upload_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_files))
}

async fn upload_files(
    State(state): State<AppState>,
    payload: Result<Json<FileUploadRequest>, JsonRejection>,
) -> Result<Json<FileUploadResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    info!("POST /upload - Processing {} files", request.files.len());

    let response = state.with_rng(|rng| upload_service::simulate_upload(rng, request.files.len()));
    Ok(Json(response))
}
