//! Restaurant API routes under `/api/restaurants`

use crate::api::handlers::restaurants;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub const BASE_PATH: &str = "/api/restaurants";

/// Routes are registered with their full paths so that both
/// `/api/restaurants` and `/api/restaurants/` resolve.
pub fn restaurant_routes() -> Router<AppState> {
    let collection = get(restaurants::list_restaurants).post(restaurants::create_restaurant);

    Router::new()
        .route(BASE_PATH, collection.clone())
        .route(&format!("{BASE_PATH}/"), collection)
        .route(
            &format!("{BASE_PATH}/cuisines"),
            get(restaurants::list_cuisines),
        )
        .route(&format!("{BASE_PATH}/seed"), post(restaurants::seed_restaurants))
}
