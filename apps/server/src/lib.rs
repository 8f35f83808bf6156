//! Foodie - restaurant directory server
//!
//! Serves the restaurant catalogue over HTTP:
//! - list/search with text, cuisine, price, rating and open-now filters
//! - distinct cuisines for filter dropdowns
//! - validated creation and sample-data seeding
//! - PostgreSQL (sqlx) or in-memory storage behind one trait

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
