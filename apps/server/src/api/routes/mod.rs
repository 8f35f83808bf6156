//! Route tables
//!
//! Each function returns a `Router<AppState>` that `create_router` merges.

pub mod restaurants;

use crate::api::handlers::metrics;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Prometheus scrape endpoint
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics::metrics_handler))
}
