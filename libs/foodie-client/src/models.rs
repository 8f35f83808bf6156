//! Response bodies specific to the API client

use serde::{Deserialize, Serialize};

/// Body of `POST /restaurants/seed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

/// Body of every non-2xx API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
