//! DISTINCT CUISINE tests (GET /api/restaurants/cuisines)

use crate::support::{assert_status, restaurant_body, to_json_body, with_test_app};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn cuisines_are_distinct_and_sorted() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let (status, _headers, body) = app
                .request(Method::GET, "/api/restaurants/cuisines", None)
                .await?;
            assert_status(status, StatusCode::OK, "cuisines");

            let cuisines: Vec<String> = serde_json::from_slice(&body)?;
            assert_eq!(
                cuisines,
                vec![
                    "American",
                    "Chinese",
                    "French",
                    "Indian",
                    "Italian",
                    "Japanese",
                    "Mediterranean",
                    "Mexican",
                    "Thai"
                ]
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn cuisines_reflect_only_stored_restaurants() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_, _, body) = app
                .request(Method::GET, "/api/restaurants/cuisines", None)
                .await?;
            let empty: Vec<String> = serde_json::from_slice(&body)?;
            assert!(empty.is_empty());

            for name in ["Pho One", "Pho Two"] {
                let body = restaurant_body(name, "Vietnamese", 4.0);
                let (status, _, _) = app
                    .request(Method::POST, "/api/restaurants", Some(to_json_body(&body)?))
                    .await?;
                assert_status(status, StatusCode::CREATED, "create");
            }

            let (_, _, body) = app
                .request(Method::GET, "/api/restaurants/cuisines", None)
                .await?;
            let cuisines: Vec<String> = serde_json::from_slice(&body)?;
            assert_eq!(cuisines, vec!["Vietnamese"]);
            Ok(())
        })
    })
    .await
}
