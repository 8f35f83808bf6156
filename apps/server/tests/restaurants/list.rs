//! LIST/SEARCH tests (GET /api/restaurants)
//!
//! Tests cover:
//! - Case-insensitive substring search over name, cuisine and location
//! - Exact-match filters: cuisine, priceRange, minRating, isOpen
//! - Sort orders and the newest-first default
//! - Rejection of malformed parameters

use crate::support::{
    assert_non_decreasing, assert_status, error_message, names, with_test_app, PriceRange,
};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn list_is_empty_before_seeding() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let restaurants = app.list("/api/restaurants").await?;
            assert!(restaurants.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_accepts_trailing_slash() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;
            assert_eq!(app.list("/api/restaurants/").await?.len(), 10);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn search_matches_name_case_insensitively() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?search=sushi").await?;
            assert_eq!(names(&restaurants), vec!["Sushi Master"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn search_matches_cuisine_and_location() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let by_location = app.list("/api/restaurants?search=DOWNTOWN").await?;
            let mut found = names(&by_location);
            found.sort_unstable();
            assert_eq!(
                found,
                vec!["Burger King", "Mediterranean Delight", "Spice Garden"]
            );

            let by_cuisine = app.list("/api/restaurants?search=ameri").await?;
            let mut found = names(&by_cuisine);
            found.sort_unstable();
            assert_eq!(found, vec!["BBQ Smokehouse", "Burger King"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn search_treats_wildcards_literally() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;
            let restaurants = app.list("/api/restaurants?search=%25").await?;
            assert!(restaurants.is_empty(), "'%' is not a wildcard");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn cuisine_filter_is_case_insensitive_substring() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?cuisine=american").await?;
            assert_eq!(restaurants.len(), 2);
            assert!(restaurants.iter().all(|r| r.cuisine == "American"));

            let partial = app.list("/api/restaurants?cuisine=medi").await?;
            assert_eq!(names(&partial), vec!["Mediterranean Delight"]);

            let location_only = app.list("/api/restaurants?cuisine=Downtown").await?;
            assert!(location_only.is_empty(), "cuisine does not look at location");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn price_range_filter_matches_exact_tier() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?priceRange=%24").await?;
            let mut found = names(&restaurants);
            found.sort_unstable();
            assert_eq!(found, vec!["Burger King", "Taco Fiesta"]);
            assert!(restaurants
                .iter()
                .all(|r| r.price_range == PriceRange::Budget));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn min_rating_is_inclusive_lower_bound() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?minRating=4.5").await?;
            let found = names(&restaurants);
            assert!(found.contains(&"Sushi Master"));
            assert!(found.contains(&"Spice Garden"), "4.5 itself is included");
            assert!(!found.contains(&"Burger King"));
            assert!(restaurants.iter().all(|r| r.rating >= 4.5));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn is_open_false_returns_closed_only() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let closed = app.list("/api/restaurants?isOpen=false").await?;
            assert_eq!(names(&closed), vec!["BBQ Smokehouse"]);

            let open = app.list("/api/restaurants?isOpen=TRUE").await?;
            assert_eq!(open.len(), 9);
            assert!(open.iter().all(|r| r.is_open));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn filters_combine_conjunctively() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app
                .list("/api/restaurants?search=town&minRating=4.5&isOpen=true&sortBy=rating")
                .await?;
            let found = names(&restaurants);
            assert_eq!(found.len(), 4);
            assert_eq!(&found[..2], &["Sushi Master", "Le Bistro"]);
            let mut tied = found[2..].to_vec();
            tied.sort_unstable();
            assert_eq!(tied, vec!["Mediterranean Delight", "Spice Garden"]);
            for r in &restaurants {
                let haystack = format!("{} {} {}", r.name, r.cuisine, r.location).to_lowercase();
                assert!(haystack.contains("town"), "{} does not match 'town'", r.name);
                assert!(r.rating >= 4.5 && r.is_open);
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn sort_by_rating_is_non_increasing() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?sortBy=rating").await?;
            assert_eq!(restaurants.len(), 10);
            assert_eq!(restaurants[0].name, "Sushi Master");
            assert_non_decreasing(&restaurants, |r| -r.rating, "sortBy=rating");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn sort_by_delivery_time_is_non_decreasing() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app.list("/api/restaurants?sortBy=deliveryTime").await?;
            assert_eq!(restaurants[0].name, "Burger King");
            assert_non_decreasing(&restaurants, |r| r.delivery_time, "sortBy=deliveryTime");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn sort_by_price_orders_by_tier() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let low = app.list("/api/restaurants?sortBy=priceLow").await?;
            assert_non_decreasing(&low, |r| r.price_range, "sortBy=priceLow");
            assert_eq!(low[0].price_range, PriceRange::Budget);

            let high = app.list("/api/restaurants?sortBy=priceHigh").await?;
            assert_non_decreasing(&high, |r| std::cmp::Reverse(r.price_range), "sortBy=priceHigh");
            assert_eq!(high[0].price_range, PriceRange::Expensive);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_sort_falls_back_to_newest_first() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let default = app.list("/api/restaurants").await?;
            let unknown = app.list("/api/restaurants?sortBy=popularity").await?;
            assert_eq!(names(&default), names(&unknown));
            assert_non_decreasing(
                &default,
                |r| std::cmp::Reverse(r.created_at),
                "default order",
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn empty_parameters_are_ignored() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.seed().await?;

            let restaurants = app
                .list("/api/restaurants?search=&cuisine=&priceRange=&minRating=&isOpen=&sortBy=")
                .await?;
            assert_eq!(restaurants.len(), 10);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn malformed_parameters_are_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for (query, param) in [
                ("minRating=four", "minRating"),
                ("isOpen=yes", "isOpen"),
                ("priceRange=cheap", "cheap"),
            ] {
                let (status, _headers, body) = app
                    .request(Method::GET, &format!("/api/restaurants?{query}"), None)
                    .await?;
                assert_status(status, StatusCode::BAD_REQUEST, query);
                let message = error_message(&body)?;
                assert!(
                    message.contains(param),
                    "{query}: message {message:?} should mention {param}"
                );
            }
            Ok(())
        })
    })
    .await
}
