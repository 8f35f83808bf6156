use axum::body::Bytes;
use serde_json::{json, Value};

pub use foodie_models::{PriceRange, Restaurant};

/// A complete, valid create body.
pub fn restaurant_body(name: &str, cuisine: &str, rating: f64) -> Value {
    json!({
        "name": name,
        "cuisine": cuisine,
        "location": "Harbourfront",
        "rating": rating,
        "priceRange": "$$",
        "deliveryTime": 25
    })
}

pub fn to_json_body(value: &Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}
