//! One-shot subcommands

use anyhow::Context;
use foodie_client::RestaurantClient;
use foodie_models::{ListParams, RestaurantPayload};

use crate::{
    render,
    state::{DirectoryState, FETCH_ERROR_MESSAGE, SEED_FAILURE_MESSAGE, SEED_SUCCESS_MESSAGE},
};

pub async fn list(client: &RestaurantClient, params: ListParams) -> anyhow::Result<()> {
    let restaurants = client
        .list_restaurants(&params)
        .await
        .context(FETCH_ERROR_MESSAGE)?;

    let state = DirectoryState {
        search_input: params.search.clone().unwrap_or_default(),
        filters: params,
        restaurants,
        ..Default::default()
    };
    println!("{}", render::filter_line(&state));
    println!("{}", render::results(&state));
    Ok(())
}

pub async fn cuisines(client: &RestaurantClient) -> anyhow::Result<()> {
    let cuisines = client
        .cuisines()
        .await
        .context("Failed to fetch cuisines")?;
    for cuisine in cuisines {
        println!("{cuisine}");
    }
    Ok(())
}

pub async fn seed(client: &RestaurantClient) -> anyhow::Result<()> {
    let outcome = client.seed().await.context(SEED_FAILURE_MESSAGE)?;
    println!("{} ({} restaurants added)", SEED_SUCCESS_MESSAGE, outcome.count);
    Ok(())
}

pub async fn create(client: &RestaurantClient, payload: RestaurantPayload) -> anyhow::Result<()> {
    let restaurant = client
        .create_restaurant(&payload)
        .await
        .context("Failed to create restaurant")?;
    println!("Created restaurant {}\n", restaurant.id);
    println!("{}", render::card(&restaurant));
    Ok(())
}
