use anyhow::Context;
use expense_ai_backend::app;
use expense_ai_backend::config::AppConfig;
use expense_ai_backend::logging::{self, LoggingConfig};
use expense_ai_backend::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env(&config.service_name))?;

    if let Some(seed) = config.rng_seed {
        tracing::info!("🎲 Using fixed random seed {}", seed);
    }

    let addr = config.socket_addr()?;
    let state = AppState::new(config);
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Expense AI mock backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
