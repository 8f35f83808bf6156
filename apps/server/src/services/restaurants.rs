//! Restaurant service - list, cuisines, create and seed
//!
//! Sits between handlers and the store:
//! - parses raw list parameters into a typed filter
//! - validates create payloads
//! - records operation metrics

use crate::{db::RestaurantStore, metrics, services::seed, Result};
use foodie_models::{ListParams, Restaurant, RestaurantPayload};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of a successful seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub message: String,
    pub count: usize,
}

pub struct RestaurantService {
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantService {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RestaurantStore> {
        &self.store
    }

    /// List/search restaurants
    pub async fn list(&self, params: ListParams) -> Result<Vec<Restaurant>> {
        let result = self.list_inner(params).await;
        metrics::record_operation("list", &result);
        result
    }

    async fn list_inner(&self, params: ListParams) -> Result<Vec<Restaurant>> {
        let filter = params.into_filter()?;
        let restaurants = self.store.list(&filter).await?;

        let filtered = if filter.is_empty() { "false" } else { "true" };
        metrics::SEARCH_RESULTS
            .with_label_values(&[filtered])
            .observe(restaurants.len() as f64);
        tracing::debug!(?filter, results = restaurants.len(), "Restaurant search complete");

        Ok(restaurants)
    }

    /// Distinct cuisines for the filter dropdown
    pub async fn cuisines(&self) -> Result<Vec<String>> {
        let result = self.store.distinct_cuisines().await;
        metrics::record_operation("cuisines", &result);
        result
    }

    /// Validate and store a new restaurant
    pub async fn create(&self, payload: RestaurantPayload) -> Result<Restaurant> {
        let result = async {
            let restaurant = payload.into_new_restaurant()?;
            let created = self.store.create(restaurant).await?;
            tracing::info!(id = %created.id, name = %created.name, "Restaurant created");
            Ok::<_, crate::Error>(created)
        }
        .await;
        metrics::record_operation("create", &result);
        result
    }

    /// Insert the sample restaurants; running it twice stores duplicates
    pub async fn seed(&self) -> Result<SeedOutcome> {
        let result = self
            .store
            .create_many(seed::sample_restaurants())
            .await
            .map(|created| SeedOutcome {
                message: seed::SEED_MESSAGE.to_string(),
                count: created.len(),
            });
        metrics::record_operation("seed", &result);
        if let Ok(outcome) = &result {
            tracing::info!(count = outcome.count, "Sample restaurants seeded");
        }
        result
    }
}
