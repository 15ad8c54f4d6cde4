//! HTTP route handlers.

pub mod health;
pub mod knots;
pub mod suggest;

pub use health::health_handler;
pub use knots::knots_handler;
pub use suggest::suggest_handler;
