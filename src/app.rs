use axum::http::Uri;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::errors::AppError;
use crate::routes::{analytics, categorize, expenses, health, insights, upload};
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/expenses", expenses::router())
        .nest("/upload", upload::router())
        .nest("/categorize", categorize::router())
        .nest("/insights", insights::router())
        .nest("/analytics", analytics::router())
}

/// Every route is served at the root and again under `/api`.
pub fn create_app(state: AppState) -> Router {
    let api = api_routes();

    Router::<AppState>::new()
        .merge(api.clone())
        .nest("/api", api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    warn!("No route for {}", uri);
    AppError::NotFound(uri.path().to_string())
}
