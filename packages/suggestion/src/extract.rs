//! Payload extraction from raw provider replies.
//!
//! A generative provider is asked for a JSON object but is free to wrap
//! it in prose, markdown fences, or to ignore the format request
//! entirely. Extraction therefore runs an ordered chain of pure locator
//! functions over the raw text, takes the first hit, and only then
//! attempts strict JSON decoding. A reply with no locatable payload is
//! an expected, recoverable condition: it degrades to the raw text as
//! the explanation instead of failing the request.

use serde_json::Value;

use crate::error::{Result, SuggestionError};
use crate::types::suggestion::ParsedSuggestion;

/// The id-array key the prompt asks the provider to use. Fixed wire
/// contract shared with [`crate::prompt`].
const KNOTS_KEY: &str = "knots";

/// Ordered payload locators; first hit wins.
const PAYLOAD_LOCATORS: &[fn(&str) -> Option<&str>] = &[fenced_json_block, brace_span];

/// Turn a raw provider reply into a [`ParsedSuggestion`].
///
/// Never panics. Fails only with [`SuggestionError::MalformedPayload`],
/// and only when a payload was located but is not valid JSON - a
/// provider that attempted structure and botched it is a more surprising
/// failure than one that produced no structure at all, and callers may
/// want to log the two differently.
pub fn extract(raw: &str) -> Result<ParsedSuggestion> {
    let Some(candidate) = locate_payload(raw) else {
        // No structured payload anywhere. The raw text is still useful
        // to a human reader even if it cannot be machine-interpreted.
        tracing::debug!("no structured payload in reply, falling back to raw text");
        return Ok(ParsedSuggestion {
            explanation: raw.trim().to_string(),
            knot_ids: vec![],
        });
    };

    let value: Value =
        serde_json::from_str(candidate).map_err(SuggestionError::MalformedPayload)?;

    let explanation = value
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // Non-array `knots` degrades to empty; non-string entries are dropped.
    let knot_ids = value
        .get(KNOTS_KEY)
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(ParsedSuggestion {
        explanation,
        knot_ids,
    })
}

/// Run the locator chain over the reply text.
fn locate_payload(text: &str) -> Option<&str> {
    PAYLOAD_LOCATORS.iter().find_map(|locate| locate(text))
}

/// Locator 1: a markdown code block explicitly tagged as JSON.
///
/// Matches the literal lowercase ```` ```json ```` opener through the
/// next closing ```` ``` ```` fence.
fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

/// Locator 2: the span from the first `{` to the last `}`.
///
/// Deliberately the outermost span, not the first balanced pair:
/// providers sometimes wrap the real object in commentary braces or
/// nested examples. This makes the locator tolerant of prose before and
/// after a single object, but it is a known false-positive source when
/// the reply contains multiple independent JSON-like fragments; that
/// ambiguity is accepted rather than papered over.
fn brace_span(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    if last < first {
        return None;
    }
    Some(&text[first..=last])
}
