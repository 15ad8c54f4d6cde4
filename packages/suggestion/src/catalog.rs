//! The immutable knot catalog store.
//!
//! Loaded once at process start and shared read-only for the process
//! lifetime. The store is an explicitly constructed value (typically
//! wrapped in an `Arc`) passed into the pipeline, never ambient global
//! state, so tests can inject arbitrary small catalogs.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SuggestionError};
use crate::types::catalog::{Knot, KnotCategory};

/// On-disk shape of `knots.json`.
#[derive(Debug, Deserialize)]
struct CatalogData {
    categories: Vec<KnotCategory>,
    knots: Vec<Knot>,
}

/// In-memory catalog of knots and their categories.
///
/// Lookup is by exact id equality. A knot whose `category_id` does not
/// reference a known category is tolerated; the category name lookup
/// degrades to `"Unknown"` instead of erroring.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<KnotCategory>,
    knots: Vec<Knot>,
    // id -> position in `knots`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-deserialized parts.
    pub fn new(categories: Vec<KnotCategory>, knots: Vec<Knot>) -> Self {
        let index = knots
            .iter()
            .enumerate()
            .map(|(i, k)| (k.id.clone(), i))
            .collect();
        Self {
            categories,
            knots,
            index,
        }
    }

    /// Parse a catalog from JSON text in the `knots.json` schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)
            .map_err(|e| SuggestionError::Config(format!("invalid catalog data: {e}")))?;
        Ok(Self::new(data.categories, data.knots))
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SuggestionError::Config(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Look up a knot by exact id.
    pub fn knot(&self, id: &str) -> Option<&Knot> {
        self.index.get(id).map(|&i| &self.knots[i])
    }

    /// All knots, in catalog order.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[KnotCategory] {
        &self.categories
    }

    /// Human-readable category name for a knot's `category_id`.
    ///
    /// Dangling references degrade to `"Unknown"` rather than erroring.
    pub fn category_name(&self, category_id: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Number of knots in the catalog.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Whether the catalog has no knots.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}
