//! Request handlers for API endpoints
//!
//! Handlers stay thin: extract, call the restaurant service, format the
//! response. Errors convert to `{error}` bodies through `crate::Error`.

pub mod metrics;
pub mod restaurants;

pub use metrics::*;
pub use restaurants::*;
