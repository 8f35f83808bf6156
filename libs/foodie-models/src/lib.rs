//! Restaurant directory data models
//!
//! Types shared by the server, the HTTP client and the terminal frontend.
//!
//! # Module Organization
//!
//! - `restaurant`: the `Restaurant` record, its price tiers and the create payload
//! - `filter`: raw list parameters and the typed filter/sort they parse into
//! - `error`: validation errors raised while parsing either of the above
//!
//! # Example
//!
//! ```rust
//! use foodie_models::{ListParams, PriceRange, SortBy};
//!
//! let params = ListParams {
//!     search: Some("sushi".to_string()),
//!     price_range: Some("$$$".to_string()),
//!     sort_by: Some("rating".to_string()),
//!     ..Default::default()
//! };
//!
//! let filter = params.into_filter().unwrap();
//! assert_eq!(filter.price_range, Some(PriceRange::Expensive));
//! assert_eq!(filter.sort_by, SortBy::Rating);
//! ```

pub mod error;
pub mod filter;
pub mod restaurant;

pub use error::{Result, ValidationError};
pub use filter::{ListParams, RestaurantFilter, SortBy};
pub use restaurant::{
    NewRestaurant, PriceRange, Restaurant, RestaurantPayload, DEFAULT_IMAGE_URL,
};
