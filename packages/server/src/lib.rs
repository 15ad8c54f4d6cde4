//! HTTP front end for the knot suggestion pipeline.
//!
//! The binary in `main.rs` wires configuration, the catalog, and the
//! Gemini provider together and serves the routes built here.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
