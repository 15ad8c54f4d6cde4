// Main entry point for the knot suggestion API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{build_app, AppState, Config};
use suggestion::{Catalog, CompletionProvider, GeminiProvider, Suggester};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,suggestion=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting knot suggestion API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Load the catalog once; it is immutable for the process lifetime
    let catalog = Catalog::from_file(&config.knots_data)
        .with_context(|| format!("Failed to load catalog from {}", config.knots_data.display()))?;
    tracing::info!(knots = catalog.len(), "Catalog loaded");

    // Wire the pipeline
    let provider: Box<dyn CompletionProvider> =
        Box::new(GeminiProvider::new(config.gemini_api_key.expose()));
    let suggester = Suggester::new(Arc::new(catalog), provider);
    let app = build_app(AppState::new(suggester));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Knot suggestion API listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
