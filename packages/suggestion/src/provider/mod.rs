//! Provider abstraction for the generative text service.
//!
//! The pipeline only ever sees this capability interface, so a
//! deterministic stub (see [`crate::testing::MockProvider`]) can stand in
//! for the real network provider in tests without touching pipeline logic.

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;

pub use gemini::GeminiProvider;

/// A text-completion provider.
///
/// Implementations own exactly one network round trip per call and do not
/// retry; retry policy belongs to the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `prompt` to the provider and return the raw text of the first
    /// content fragment in its reply.
    ///
    /// The returned text is an opaque payload: it may contain prose,
    /// markdown code fences, partial JSON, or nothing parseable at all.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl CompletionProvider for Box<dyn CompletionProvider> {
    async fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt).await
    }
}
