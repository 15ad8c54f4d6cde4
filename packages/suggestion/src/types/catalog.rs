//! Catalog data types.
//!
//! These mirror the on-disk `knots.json` schema (camelCase field names),
//! so the data file deserializes directly into the store.

use serde::{Deserialize, Serialize};

/// How hard a knot is to learn and tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One step of a knot's tying instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub step_number: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A single knot in the catalog.
///
/// Immutable after load; owned by the catalog store for the life of the
/// process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Knot {
    /// Stable unique identifier, e.g. `"bowline"`. This is the value the
    /// provider is asked to echo back.
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub difficulty: Difficulty,
    /// Relative strength rating, 1-10.
    pub strength: u8,
    pub uses: Vec<String>,
    pub description: String,
    pub main_image: String,
    pub instructions: Vec<InstructionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

/// A knot category (bends, hitches, loops, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnotCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}
