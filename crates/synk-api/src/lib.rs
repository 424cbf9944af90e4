//! Axum HTTP API server for the synk backend.
//!
//! This crate provides:
//! - Waitlist signup and video upload endpoints
//! - Job status polling
//! - The demo render placeholder and a store diagnostic endpoint

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
