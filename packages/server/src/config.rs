//! Environment-based configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use suggestion::security::SecretString;

const DEFAULT_PORT: u16 = 5050;

/// Server configuration, loaded from the environment.
///
/// The API key is held in a redacting wrapper so a stray
/// `tracing::debug!(?config, ...)` can never leak it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to bind on (`PORT`, default 5050).
    pub port: u16,

    /// API key for the Gemini provider (`GEMINI_API_KEY`, required).
    pub gemini_api_key: SecretString,

    /// Path to the catalog data file (`KNOTS_DATA`, default: the
    /// bundled `data/knots.json` next to this package's manifest).
    pub knots_data: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY not set")?
            .into();

        let knots_data = std::env::var("KNOTS_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_knots_data());

        Ok(Self {
            port,
            gemini_api_key,
            knots_data,
        })
    }
}

/// The bundled catalog, located relative to this package's manifest so
/// `cargo run -p server` resolves it from the workspace root (or any
/// other working directory) without setting `KNOTS_DATA`.
fn default_knots_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("knots.json")
}
