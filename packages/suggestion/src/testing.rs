//! Testing utilities including a mock provider.
//!
//! Useful for testing applications that use the suggestion pipeline
//! without making real provider calls.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::{Result, SuggestionError};
use crate::provider::CompletionProvider;
use crate::types::catalog::{Difficulty, InstructionStep, Knot, KnotCategory};

/// What the mock should do on the next `complete` call.
#[derive(Debug, Clone)]
enum MockReply {
    /// Return this raw text.
    Text(String),
    /// Fail as if the provider were unreachable.
    Unavailable(String),
    /// Fail as if the provider's envelope carried an error object.
    Rejected(String),
    /// Fail as if the provider returned no text fragment.
    Empty,
    /// Never resolve (for cancellation tests).
    Stall,
}

/// A deterministic stand-in for the real provider.
///
/// Replies are scripted in order; once the script is exhausted, a bland
/// valid reply is returned. Every prompt passed to `complete` is
/// recorded for assertions.
#[derive(Default)]
pub struct MockProvider {
    script: Arc<RwLock<VecDeque<MockReply>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw text reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queue a transport failure.
    pub fn failing_unavailable(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(MockReply::Unavailable(message.into()));
        self
    }

    /// Queue an envelope-level rejection.
    pub fn failing_rejected(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(MockReply::Rejected(message.into()));
        self
    }

    /// Queue an empty completion.
    pub fn failing_empty(self) -> Self {
        self.script.write().unwrap().push_back(MockReply::Empty);
        self
    }

    /// Queue a call that never resolves.
    pub fn stalled(self) -> Self {
        self.script.write().unwrap().push_back(MockReply::Stall);
        self
    }

    /// All prompts this mock has been asked to complete.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        let next = self.script.write().unwrap().pop_front();
        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Unavailable(message)) => {
                Err(SuggestionError::ProviderUnavailable(message))
            }
            Some(MockReply::Rejected(message)) => {
                Err(SuggestionError::ProviderRejected { message })
            }
            Some(MockReply::Empty) => Err(SuggestionError::EmptyCompletion),
            Some(MockReply::Stall) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(r#"{"explanation":"No scripted reply.","knots":[]}"#.to_string()),
        }
    }
}

/// A small fixed catalog for tests.
pub fn small_catalog() -> Catalog {
    let categories = vec![
        KnotCategory {
            id: "loops".to_string(),
            name: "Loops".to_string(),
            description: "Knots that form a fixed or sliding loop.".to_string(),
        },
        KnotCategory {
            id: "hitches".to_string(),
            name: "Hitches".to_string(),
            description: "Knots that attach a rope to an object.".to_string(),
        },
    ];

    let knots = vec![
        test_knot("bowline", "Bowline", "loops", Difficulty::Medium, 7),
        test_knot("clove-hitch", "Clove Hitch", "hitches", Difficulty::Easy, 6),
        test_knot("figure-eight", "Figure Eight", "loops", Difficulty::Easy, 8),
    ];

    Catalog::new(categories, knots)
}

/// Build a minimal but fully-populated knot for fixtures.
pub fn test_knot(
    id: &str,
    name: &str,
    category_id: &str,
    difficulty: Difficulty,
    strength: u8,
) -> Knot {
    Knot {
        id: id.to_string(),
        name: name.to_string(),
        category_id: category_id.to_string(),
        difficulty,
        strength,
        uses: vec![format!("Typical use of the {name}")],
        description: format!("Description of the {name}."),
        main_image: format!("/images/{id}.svg"),
        instructions: vec![InstructionStep {
            step_number: 1,
            instruction: format!("Tie the {name}."),
            image: None,
        }],
        tips: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_replies_come_back_in_order() {
        let provider = MockProvider::new()
            .with_reply("first")
            .failing_empty()
            .with_reply("third");

        assert_eq!(provider.complete("a").await.unwrap(), "first");
        assert!(matches!(
            provider.complete("b").await.unwrap_err(),
            SuggestionError::EmptyCompletion
        ));
        assert_eq!(provider.complete("c").await.unwrap(), "third");

        assert_eq!(provider.prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn exhausted_script_returns_a_valid_default() {
        let provider = MockProvider::new();
        let reply = provider.complete("anything").await.unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&reply).is_ok());
    }
}
