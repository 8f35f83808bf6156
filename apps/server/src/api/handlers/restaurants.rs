//! Restaurant endpoint handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use foodie_models::{ListParams, RestaurantPayload};

use crate::{
    api::extractors::{JsonBody, QueryParams},
    request_context::RequestContext,
    state::AppState,
    Result,
};

/// `GET /api/restaurants` - list/search with optional filters and sort
pub async fn list_restaurants(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse> {
    let restaurants = state.restaurant_service.list(params).await?;
    Ok(Json(restaurants))
}

/// `GET /api/restaurants/cuisines`
pub async fn list_cuisines(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let cuisines = state.restaurant_service.cuisines().await?;
    Ok(Json(cuisines))
}

/// `POST /api/restaurants`
pub async fn create_restaurant(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    JsonBody(payload): JsonBody<RestaurantPayload>,
) -> Result<impl IntoResponse> {
    let restaurant = state.restaurant_service.create(payload).await?;

    if let Some(Extension(context)) = context {
        tracing::debug!(request_id = %context.request_id, id = %restaurant.id, "Create handled");
    }

    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// `POST /api/restaurants/seed`
pub async fn seed_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let outcome = state.restaurant_service.seed().await?;
    Ok(Json(outcome))
}
