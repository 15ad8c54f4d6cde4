//! Gemini implementation of [`CompletionProvider`].
//!
//! Talks to the `generateContent` endpoint of the Generative Language
//! API. The API key is held in a redacting wrapper so it never shows up
//! in debug output or logs, and is sent via the `x-goog-api-key` header
//! rather than the URL.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestionError};
use crate::provider::CompletionProvider;
use crate::security::SecretString;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini-backed text-completion provider.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| SuggestionError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the model (default: gemini-2.0-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Interpret a raw HTTP reply from the API.
    ///
    /// An embedded error object wins over the transport status: Gemini
    /// reports request-level problems as a JSON `error` body on a non-2xx
    /// reply, and that is a rejection of the request, not an outage.
    fn interpret(status: StatusCode, body: &str) -> Result<String> {
        let envelope: Option<GenerateResponse> = serde_json::from_str(body).ok();

        if let Some(err) = envelope.as_ref().and_then(|e| e.error.as_ref()) {
            return Err(SuggestionError::ProviderRejected {
                message: err.message.clone(),
            });
        }

        if !status.is_success() {
            return Err(SuggestionError::ProviderUnavailable(format!(
                "HTTP {status}"
            )));
        }

        // First textual content fragment, if any.
        let text = envelope
            .into_iter()
            .flat_map(|e| e.candidates)
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .into_iter()
            .flatten()
            .find_map(|p| p.text);

        match text {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => Err(SuggestionError::EmptyCompletion),
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling provider");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestionError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SuggestionError::ProviderUnavailable(e.to_string()))?;

        Self::interpret(status, &body)
    }
}

// Wire types for the generateContent exchange.

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let provider = GeminiProvider::new("test-key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9999");

        assert_eq!(provider.model(), "gemini-1.5-pro");
        assert_eq!(provider.base_url, "http://localhost:9999");
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let provider = GeminiProvider::new("super-secret");
        let debug = format!("{:?}", provider.api_key);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn interpret_extracts_first_fragment() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        }"#;
        let text = GeminiProvider::interpret(StatusCode::OK, body).unwrap();
        assert_eq!(text, "first");
    }

    #[test]
    fn interpret_embedded_error_is_rejection() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let err = GeminiProvider::interpret(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(
            err,
            SuggestionError::ProviderRejected { ref message } if message == "API key not valid"
        ));
    }

    #[test]
    fn interpret_non_success_without_envelope_is_unavailable() {
        let err =
            GeminiProvider::interpret(StatusCode::BAD_GATEWAY, "upstream exploded").unwrap_err();
        assert!(matches!(err, SuggestionError::ProviderUnavailable(_)));
    }

    #[test]
    fn interpret_missing_fragment_is_empty_completion() {
        for body in [
            r#"{"candidates": []}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#,
            r#"{}"#,
        ] {
            let err = GeminiProvider::interpret(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, SuggestionError::EmptyCompletion), "{body}");
        }
    }
}
