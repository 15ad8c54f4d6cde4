//! Resolution of extracted ids against the catalog.

use crate::catalog::Catalog;
use crate::types::suggestion::{ParsedSuggestion, SuggestionResult};

/// Map extracted knot ids onto catalog knots.
///
/// Ids the provider hallucinated are dropped without error. Order is
/// preserved - the provider's ranking is meaningful - and duplicates are
/// NOT collapsed: a repeated id is a data-quality signal to fix in the
/// prompt upstream, not in this layer.
pub fn resolve(parsed: ParsedSuggestion, catalog: &Catalog) -> SuggestionResult {
    let knots = parsed
        .knot_ids
        .iter()
        .filter_map(|id| {
            let knot = catalog.knot(id);
            if knot.is_none() {
                tracing::debug!(%id, "dropping suggested id not present in catalog");
            }
            knot.cloned()
        })
        .collect();

    SuggestionResult {
        explanation: parsed.explanation,
        knots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_catalog;

    fn parsed(explanation: &str, ids: &[&str]) -> ParsedSuggestion {
        ParsedSuggestion {
            explanation: explanation.to_string(),
            knot_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn hallucinated_ids_are_dropped_silently() {
        let catalog = small_catalog();
        let result = resolve(parsed("Use a bowline.", &["bowline", "unknown-id"]), &catalog);

        assert_eq!(result.explanation, "Use a bowline.");
        assert_eq!(result.knots.len(), 1);
        assert_eq!(result.knots[0].id, "bowline");
    }

    #[test]
    fn order_is_preserved_and_duplicates_propagate() {
        let catalog = small_catalog();
        let result = resolve(parsed("x", &["clove-hitch", "bowline", "clove-hitch"]), &catalog);

        let ids: Vec<_> = result.knots.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["clove-hitch", "bowline", "clove-hitch"]);
    }

    #[test]
    fn empty_ids_yield_empty_result() {
        let catalog = small_catalog();
        let result = resolve(parsed("nothing matched", &[]), &catalog);
        assert_eq!(result.explanation, "nothing matched");
        assert!(result.knots.is_empty());
    }
}
