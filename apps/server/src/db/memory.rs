//! In-memory restaurant store
//!
//! Evaluates the same `RestaurantFilter` as the SQL builder, in process.
//! Used by tests and by `foodie-server --memory`.

use super::traits::RestaurantStore;
use crate::Result;
use async_trait::async_trait;
use chrono::Utc;
use foodie_models::{NewRestaurant, Restaurant, RestaurantFilter};
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryRestaurantStore {
    restaurants: RwLock<Vec<Restaurant>>,
}

impl InMemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        let mut matches: Vec<Restaurant> = restaurants
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        matches.sort_by(|a, b| filter.sort_by.compare(a, b));
        Ok(matches)
    }

    async fn distinct_cuisines(&self) -> Result<Vec<String>> {
        let restaurants = self.restaurants.read().await;
        let cuisines: BTreeSet<&str> = restaurants.iter().map(|r| r.cuisine.as_str()).collect();
        Ok(cuisines.into_iter().map(str::to_string).collect())
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant> {
        let created = restaurant.into_restaurant(Uuid::new_v4().to_string(), Utc::now());
        self.restaurants.write().await.push(created.clone());
        Ok(created)
    }

    async fn create_many(&self, restaurants: Vec<NewRestaurant>) -> Result<Vec<Restaurant>> {
        // One write lock for the whole batch
        let mut stored = self.restaurants.write().await;
        let created: Vec<Restaurant> = restaurants
            .into_iter()
            .map(|r| r.into_restaurant(Uuid::new_v4().to_string(), Utc::now()))
            .collect();
        stored.extend(created.iter().cloned());
        Ok(created)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.restaurants.read().await.len() as i64)
    }
}
