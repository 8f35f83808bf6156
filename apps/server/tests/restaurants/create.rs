//! CREATE tests (POST /api/restaurants)
//!
//! Tests cover:
//! - Server-assigned ids and timestamps
//! - Defaults for image and isOpen, trimming of text fields
//! - Validation failures return 400 and persist nothing

use crate::support::{
    assert_status, error_message, names, restaurant_body, to_json_body, with_test_app, Restaurant,
    TestApp,
};
use axum::{
    body::Bytes,
    http::{Method, StatusCode},
};
use foodie_models::DEFAULT_IMAGE_URL;
use serde_json::json;

async fn stored_count(app: &TestApp) -> anyhow::Result<usize> {
    Ok(app.list("/api/restaurants").await?.len())
}

#[tokio::test]
async fn create_assigns_id_and_defaults() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let body = restaurant_body("Harbour Noodles", "Vietnamese", 4.1);

            let (status, _headers, bytes) = app
                .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                .await?;
            assert_status(status, StatusCode::CREATED, "create");

            let created: serde_json::Value = serde_json::from_slice(&bytes)?;
            let id = created["_id"].as_str().expect("created restaurant has _id");
            assert!(uuid::Uuid::parse_str(id).is_ok(), "id should be a UUID: {id}");
            assert_eq!(created["image"], DEFAULT_IMAGE_URL);
            assert_eq!(created["isOpen"], true);
            assert_eq!(created["priceRange"], "$$");
            assert!(created.get("createdAt").is_some());
            assert!(created.get("description").is_none());

            let listed = app.list("/api/restaurants").await?;
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].id, id);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_trims_text_and_keeps_explicit_fields() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let body = json!({
                "name": "  Night Market  ",
                "cuisine": "Taiwanese ",
                "location": " Eastside",
                "rating": 0,
                "priceRange": "$$$$",
                "deliveryTime": 0,
                "image": "https://images.example.org/night-market.jpg",
                "description": "Late-night street food",
                "isOpen": false
            });

            let (status, _headers, bytes) = app
                .request(Method::POST, "/api/restaurants/", Some(to_json_body(&body)?))
                .await?;
            assert_status(status, StatusCode::CREATED, "create");

            let created: Restaurant = serde_json::from_slice(&bytes)?;
            assert_eq!(created.name, "Night Market");
            assert_eq!(created.cuisine, "Taiwanese");
            assert_eq!(created.location, "Eastside");
            assert_eq!(created.rating, 0.0);
            assert_eq!(created.delivery_time, 0.0);
            assert_eq!(created.image, "https://images.example.org/night-market.jpg");
            assert_eq!(created.description.as_deref(), Some("Late-night street food"));
            assert!(!created.is_open);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_rejects_rating_above_five() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let body = restaurant_body("Too Good", "Fusion", 6.0);

            let (status, _headers, bytes) = app
                .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "rating=6");
            assert!(error_message(&bytes)?.contains("rating must be between 0 and 5"));
            assert_eq!(stored_count(app).await?, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_rejects_missing_and_blank_fields() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut body = restaurant_body("Placeholder", "Greek", 4.0);
            body.as_object_mut().expect("object").remove("location");
            body["name"] = json!("   ");

            let (status, _headers, bytes) = app
                .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "missing fields");

            let message = error_message(&bytes)?;
            assert!(message.contains("location is required"), "{message}");
            assert!(message.contains("name must not be empty"), "{message}");
            assert_eq!(stored_count(app).await?, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_accepts_fractional_and_integral_float_delivery_times() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for (name, minutes) in [("Half Past", json!(25.5)), ("On The Dot", json!(30.0))] {
                let mut body = restaurant_body(name, "Cafe", 4.0);
                body["deliveryTime"] = minutes.clone();

                let (status, _headers, bytes) = app
                    .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                    .await?;
                assert_status(status, StatusCode::CREATED, name);

                let created: Restaurant = serde_json::from_slice(&bytes)?;
                assert_eq!(Some(created.delivery_time), minutes.as_f64(), "{name}");
            }

            let restaurants = app.list("/api/restaurants?sortBy=deliveryTime").await?;
            assert_eq!(names(&restaurants), vec!["Half Past", "On The Dot"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_rejects_negative_delivery_time() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut body = restaurant_body("Slow Food", "Italian", 4.0);
            body["deliveryTime"] = json!(-5);

            let (status, _headers, bytes) = app
                .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "deliveryTime=-5");
            assert!(error_message(&bytes)?.contains("deliveryTime must not be negative"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_rejects_unknown_price_tier_and_wrong_types() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut unknown_tier = restaurant_body("Gold Leaf", "French", 4.9);
            unknown_tier["priceRange"] = json!("$$$$$");

            let mut wrong_type = restaurant_body("Typo Tavern", "Pub", 3.9);
            wrong_type["rating"] = json!("high");

            for body in [unknown_tier, wrong_type] {
                let (status, _headers, bytes) = app
                    .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                    .await?;
                assert_status(status, StatusCode::BAD_REQUEST, "invalid body");
                assert!(error_message(&bytes)?.starts_with("Invalid JSON in request body"));
            }
            assert_eq!(stored_count(app).await?, 0);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_rejects_malformed_json() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, bytes) = app
                .request(
                    Method::POST,
                    "/api/restaurants",
                    Some(Bytes::from_static(b"{\"name\": ")),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "malformed JSON");
            assert!(error_message(&bytes)?.starts_with("Invalid JSON in request body"));
            Ok(())
        })
    })
    .await
}
