//! SEED tests (POST /api/restaurants/seed)

use crate::support::{assert_status, names, with_test_app};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn seed_returns_message_and_count() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request(Method::POST, "/api/restaurants/seed", None)
                .await?;
            assert_status(status, StatusCode::OK, "seed");

            let outcome: serde_json::Value = serde_json::from_slice(&body)?;
            assert_eq!(outcome["message"], "Sample data seeded successfully");
            assert_eq!(outcome["count"], 10);

            let restaurants = app.list("/api/restaurants").await?;
            assert_eq!(restaurants.len(), 10);
            assert!(names(&restaurants).contains(&"Thai Orchid"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn seeding_twice_duplicates_records() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?search=sushi").await?;
            assert_eq!(names(&restaurants), vec!["Sushi Master", "Sushi Master"]);
            assert_ne!(restaurants[0].id, restaurants[1].id);
            assert_eq!(app.list("/api/restaurants").await?.len(), 20);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn seed_rejects_get() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(Method::GET, "/api/restaurants/seed", None)
                .await?;
            assert_status(status, StatusCode::METHOD_NOT_ALLOWED, "GET seed");
            Ok(())
        })
    })
    .await
}
