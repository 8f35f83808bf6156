//! Core trait for restaurant storage backends

use crate::Result;
use async_trait::async_trait;
use foodie_models::{NewRestaurant, Restaurant, RestaurantFilter};

/// Storage for restaurant records
///
/// This trait defines the storage operations the HTTP API needs. Any backend
/// (PostgreSQL, in-memory, etc.) can implement it; handlers only ever see an
/// `Arc<dyn RestaurantStore>`.
///
/// Records are append-only: nothing here updates or deletes.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Return all restaurants matching `filter`, ordered by `filter.sort_by`
    async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>>;

    /// Distinct cuisine values currently stored, ascending
    async fn distinct_cuisines(&self) -> Result<Vec<String>>;

    /// Store a validated restaurant, assigning its id and timestamps
    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant>;

    /// Store a batch of restaurants atomically
    ///
    /// Either every record is stored or none is.
    async fn create_many(&self, restaurants: Vec<NewRestaurant>) -> Result<Vec<Restaurant>>;

    /// Number of stored restaurants
    async fn count(&self) -> Result<i64>;

    /// Release backend resources on shutdown
    async fn close(&self) {}
}
