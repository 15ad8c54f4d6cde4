//! Catalog endpoint.

use axum::{extract::Extension, Json};
use serde::Serialize;
use suggestion::{Knot, KnotCategory};

use crate::app::AppState;

#[derive(Serialize)]
pub struct CatalogResponse {
    categories: Vec<KnotCategory>,
    knots: Vec<Knot>,
}

/// Serve the full catalog (categories and knots).
pub async fn knots_handler(Extension(state): Extension<AppState>) -> Json<CatalogResponse> {
    let catalog = state.suggester.catalog();
    Json(CatalogResponse {
        categories: catalog.categories().to_vec(),
        knots: catalog.knots().to_vec(),
    })
}
