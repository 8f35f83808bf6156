//! Metrics collection for the restaurant directory server
//!
//! This module defines and manages Prometheus metrics for monitoring the server.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, register_int_gauge_vec,
    HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

const API_PREFIX: &str = "/api/restaurants";

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "foodie_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "foodie_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "foodie_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Restaurant Operation Metrics

    /// Restaurant operations by operation and outcome
    pub static ref RESTAURANT_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "foodie_restaurant_operations_total",
        "Total number of restaurant operations",
        &["operation", "status"]
    )
    .expect("Failed to register RESTAURANT_OPERATIONS_TOTAL");

    /// Number of restaurants returned by list/search
    pub static ref SEARCH_RESULTS: HistogramVec = register_histogram_vec!(
        "foodie_search_results",
        "Number of restaurants returned by list/search",
        &["filtered"],
        vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0, 1000.0]
    )
    .expect("Failed to register SEARCH_RESULTS");

    /// Restaurants currently stored, refreshed on each scrape
    pub static ref RESTAURANTS_STORED: IntGauge = register_int_gauge!(
        "foodie_restaurants_stored",
        "Number of restaurants currently stored"
    )
    .expect("Failed to register RESTAURANTS_STORED");

    // Database Metrics

    /// Database query duration
    pub static ref DB_QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "foodie_db_query_duration_seconds",
        "Database query duration in seconds",
        &["query_type"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]
    )
    .expect("Failed to register DB_QUERY_DURATION_SECONDS");

    /// Database query errors
    pub static ref DB_QUERY_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "foodie_db_query_errors_total",
        "Total number of database query errors",
        &["query_type"]
    )
    .expect("Failed to register DB_QUERY_ERRORS_TOTAL");
}

/// Record the outcome of a restaurant operation
pub fn record_operation<T, E>(operation: &str, result: &Result<T, E>) {
    let status = if result.is_ok() { "success" } else { "error" };
    RESTAURANT_OPERATIONS_TOTAL
        .with_label_values(&[operation, status])
        .inc();
}

/// Collapse request paths onto the known routes to bound label cardinality
pub fn sanitize_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match trimmed {
        "/" | "/health" | "/metrics" | "/favicon.ico" => trimmed.to_string(),
        API_PREFIX => API_PREFIX.to_string(),
        p if p == format!("{}/cuisines", API_PREFIX) || p == format!("{}/seed", API_PREFIX) => {
            p.to_string()
        }
        _ => "other".to_string(),
    }
}

/// Map an API request to its restaurant operation name
pub fn extract_operation(method: &str, path: &str) -> Option<String> {
    let rest = path.strip_prefix(API_PREFIX)?;
    let rest = rest.trim_matches('/');

    match (method, rest) {
        ("GET", "") => Some("list".to_string()),
        ("GET", "cuisines") => Some("cuisines".to_string()),
        ("POST", "") => Some("create".to_string()),
        ("POST", "seed") => Some("seed".to_string()),
        _ => None,
    }
}
