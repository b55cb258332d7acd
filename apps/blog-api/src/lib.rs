//! # Blog API
//!
//! Actix-web server exposing the post resource under `/api/posts`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;
