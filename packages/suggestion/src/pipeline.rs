//! Pipeline orchestration: build the prompt, invoke the provider,
//! extract the payload, resolve against the catalog.
//!
//! Each call is an independent, stateless transaction. The only shared
//! state is the read-only catalog, which is safe for unlimited
//! concurrent readers; the only suspending point is the provider's
//! network round trip.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::error::{Result, SuggestionError};
use crate::extract::extract;
use crate::prompt::format_suggest_prompt;
use crate::provider::CompletionProvider;
use crate::resolve::resolve;
use crate::types::suggestion::SuggestionResult;

/// The suggestion pipeline over an injected catalog and provider.
pub struct Suggester<P> {
    catalog: Arc<Catalog>,
    provider: P,
}

impl<P: CompletionProvider> Suggester<P> {
    /// Create a pipeline over the given catalog and provider.
    pub fn new(catalog: Arc<Catalog>, provider: P) -> Self {
        Self { catalog, provider }
    }

    /// The catalog this pipeline resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Produce a suggestion for a user query.
    ///
    /// The caller guarantees `query` is non-empty after trimming. On
    /// `Ok`, every knot in the result exists in the catalog.
    pub async fn suggest(&self, query: &str) -> Result<SuggestionResult> {
        let prompt = format_suggest_prompt(query, &self.catalog);
        let raw = self.provider.complete(&prompt).await?;
        let parsed = extract(&raw)?;
        let result = resolve(parsed, &self.catalog);

        tracing::debug!(
            suggested = result.knots.len(),
            explanation_len = result.explanation.len(),
            "suggestion resolved"
        );

        Ok(result)
    }

    /// Like [`suggest`](Self::suggest), but races against a cancellation
    /// token. Cancellation is its own terminal outcome
    /// ([`SuggestionError::Cancelled`]), never a parse failure; the
    /// in-flight provider call is dropped, which aborts the underlying
    /// request.
    pub async fn suggest_with_cancellation(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<SuggestionResult> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SuggestionError::Cancelled),
            result = self.suggest(query) => result,
        }
    }
}
