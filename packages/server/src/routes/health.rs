//! Health check endpoint.

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    knots: usize,
}

/// Health check endpoint.
///
/// The service has no external state beyond the in-memory catalog, so
/// reporting the catalog size doubles as a load sanity check.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        knots: state.suggester.catalog().len(),
    })
}
