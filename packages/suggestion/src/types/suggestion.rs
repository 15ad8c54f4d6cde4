//! Suggestion pipeline types.

use serde::Serialize;

use crate::types::catalog::Knot;

/// The provider's reply after payload extraction, before catalog
/// resolution. `knot_ids` may still contain ids that do not exist in the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSuggestion {
    pub explanation: String,
    pub knot_ids: Vec<String>,
}

/// The final, catalog-bound result.
///
/// Every knot in `knots` exists in the catalog; ids that failed to
/// resolve were dropped, never null-filled. Order follows the provider's
/// ranking.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResult {
    pub explanation: String,
    pub knots: Vec<Knot>,
}
