//! Metrics endpoint handler
//!
//! Exposes Prometheus-compatible metrics for monitoring

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::state::AppState;

/// Handler for /metrics endpoint
///
/// Refreshes the stored-restaurant gauge before encoding. A failed count is
/// logged and leaves the previous value in place.
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.restaurant_service.store().count().await {
        Ok(count) => crate::metrics::RESTAURANTS_STORED.set(count),
        Err(e) => tracing::warn!(error = %e, "Failed to count restaurants for metrics"),
    }

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [("Content-Type", encoder.format_type().to_string())],
            buffer,
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("Content-Type", "text/plain".to_string())],
                b"Failed to encode metrics".to_vec(),
            )
        }
    }
}
