//! Shared application state handed to every handler

use crate::{
    config::Config,
    db::{InMemoryRestaurantStore, PostgresRestaurantStore, RestaurantStore},
    services::RestaurantService,
    Result,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub restaurant_service: Arc<RestaurantService>,
}

impl AppState {
    /// Connect to PostgreSQL per `config.database` and build the state.
    pub async fn new(config: Config) -> Result<Self> {
        let store = PostgresRestaurantStore::connect(&config.database).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build state around a process-local store; nothing persists past shutdown.
    pub fn in_memory(config: Config) -> Self {
        tracing::warn!("Using in-memory restaurant store; data is lost on shutdown");
        Self::with_store(config, Arc::new(InMemoryRestaurantStore::new()))
    }

    pub fn with_store(config: Config, store: Arc<dyn RestaurantStore>) -> Self {
        Self {
            config: Arc::new(config),
            restaurant_service: Arc::new(RestaurantService::new(store)),
        }
    }

    /// Release the store's resources.
    pub async fn shutdown(&self) {
        self.restaurant_service.store().close().await;
    }
}
