//! Catalog-grounded knot suggestion pipeline.
//!
//! A user describes a tying situation in free text; the pipeline builds a
//! grounding prompt from the knot catalog, invokes a generative text
//! provider, extracts a structured payload from the provider's free-form
//! reply, and resolves the suggested ids against the catalog. The result
//! never contains a knot that is not in the catalog.
//!
//! # Design
//!
//! - The provider is a capability interface ([`CompletionProvider`]) with
//!   one production implementation ([`GeminiProvider`]) and one
//!   deterministic test implementation ([`testing::MockProvider`]).
//! - The catalog is an explicitly constructed immutable value passed into
//!   the pipeline, never ambient global state.
//! - Extraction is a chain of pure locator functions tried in order
//!   (fenced JSON block, then outermost brace span), with a graceful
//!   fallback when the reply carries no structure at all.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use suggestion::{Catalog, GeminiProvider, Suggester};
//!
//! let catalog = Arc::new(Catalog::from_file("data/knots.json")?);
//! let suggester = Suggester::new(catalog, GeminiProvider::from_env()?);
//! let result = suggester.suggest("secure a boat to a dock").await?;
//! ```

pub mod catalog;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod resolve;
pub mod security;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use catalog::Catalog;
pub use error::{Result, SuggestionError};
pub use extract::extract;
pub use pipeline::Suggester;
pub use prompt::format_suggest_prompt;
pub use provider::{CompletionProvider, GeminiProvider};
pub use resolve::resolve;
pub use types::{
    Difficulty, InstructionStep, Knot, KnotCategory, ParsedSuggestion, SuggestionResult,
};
