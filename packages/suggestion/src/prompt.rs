//! Grounding prompt for knot suggestions.
//!
//! The prompt enumerates the catalog as `id: name` pairs only - full
//! descriptions are intentionally omitted to bound prompt size - and pins
//! the reply shape to a JSON object with exactly two keys, `explanation`
//! and `knots`. The `knots` key name is a fixed wire contract shared with
//! the extractor; do not rename one side without the other.

use crate::catalog::Catalog;

/// Prompt for suggesting knots from the catalog.
pub const SUGGEST_PROMPT: &str = r#"You are a knot-tying expert.

Given this user query: "{query}", suggest the most relevant knots from the following list (with id and name):

{knots}

Reply with a JSON object of this form:
{
  "explanation": <brief explanation>,
  "knots": [<ids of suggested knots>]
}"#;

/// Build the exact prompt text sent to the provider.
///
/// Deterministic and total: any query the caller hands us is embedded
/// verbatim, and an empty catalog simply produces an empty list section.
pub fn format_suggest_prompt(query: &str, catalog: &Catalog) -> String {
    let knots_text = catalog
        .knots()
        .iter()
        .map(|k| format!("- {}: {}", k.id, k.name))
        .collect::<Vec<_>>()
        .join("\n");

    SUGGEST_PROMPT
        .replace("{query}", query)
        .replace("{knots}", &knots_text)
}
