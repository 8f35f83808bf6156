//! Service layer - business logic between handlers and storage

pub mod restaurants;
pub mod seed;

pub use restaurants::{RestaurantService, SeedOutcome};
pub use seed::sample_restaurants;
