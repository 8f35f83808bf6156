//! Foodie API Client
//!
//! Async wrapper around the restaurant directory HTTP API.
//!
//! # Examples
//!
//! ```rust,no_run
//! use foodie_client::RestaurantClient;
//! use foodie_models::ListParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestaurantClient::new()?;
//! let params = ListParams {
//!     search: Some("sushi".to_string()),
//!     ..Default::default()
//! };
//! let restaurants = client.list_restaurants(&params).await?;
//! # Ok(())
//! # }
//! ```
//!
pub mod client;
pub mod error;
pub mod models;

pub use client::{RestaurantClient, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use models::{ErrorBody, SeedResponse};
