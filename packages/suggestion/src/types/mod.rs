//! Domain data types.

pub mod catalog;
pub mod suggestion;

pub use catalog::{Difficulty, InstructionStep, Knot, KnotCategory};
pub use suggestion::{ParsedSuggestion, SuggestionResult};
