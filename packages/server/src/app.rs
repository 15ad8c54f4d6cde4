//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use suggestion::{CompletionProvider, Suggester};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{health_handler, knots_handler, suggest_handler};

/// Shared application state.
///
/// The suggester owns the read-only catalog; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub suggester: Arc<Suggester<Box<dyn CompletionProvider>>>,
}

impl AppState {
    pub fn new(suggester: Suggester<Box<dyn CompletionProvider>>) -> Self {
        Self {
            suggester: Arc::new(suggester),
        }
    }
}

/// Build the Axum application router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/knots", get(knots_handler))
        .route("/api/suggest", post(suggest_handler))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
