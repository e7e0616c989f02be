//! HTTP gateway for Shortify.
//!
//! Exposes slug creation (`POST /api/shorten`), slug resolution
//! (`GET /api/redirect?slug=..` and `GET /{slug}`) and a health check over
//! axum. The binary in `bin/http` wires it to a store backend.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod origin;
pub mod state;

pub use app::App;
pub use state::AppState;
