//! Restaurant directory API client

use crate::error::{Error, Result};
use crate::models::{ErrorBody, SeedResponse};
use foodie_models::{ListParams, Restaurant, RestaurantPayload};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL used by the bundled frontend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Client for the `/restaurants` resource of the directory API.
#[derive(Debug, Clone)]
pub struct RestaurantClient {
    client: Client,
    base_url: String,
}

impl RestaurantClient {
    /// Create a client pointed at [`DEFAULT_API_URL`].
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    /// Create a client with a custom API base URL (e.g. `http://host:8080/api`).
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List restaurants matching the given parameters (empty values are skipped).
    pub async fn list_restaurants(&self, params: &ListParams) -> Result<Vec<Restaurant>> {
        let url = self.list_url(params);
        tracing::debug!(url = %url, "Fetching restaurants");
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    /// Distinct cuisines present in the directory.
    pub async fn cuisines(&self) -> Result<Vec<String>> {
        let url = format!("{}/restaurants/cuisines", self.base_url);
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    /// Create a restaurant; validation failures surface as `Error::Api { status: 400, .. }`.
    pub async fn create_restaurant(&self, payload: &RestaurantPayload) -> Result<Restaurant> {
        let url = format!("{}/restaurants", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        decode(response).await
    }

    /// Insert the sample restaurants.
    pub async fn seed(&self) -> Result<SeedResponse> {
        let url = format!("{}/restaurants/seed", self.base_url);
        let response = self.client.post(&url).send().await?;
        decode(response).await
    }

    fn list_url(&self, params: &ListParams) -> String {
        let mut url = format!("{}/restaurants", self.base_url);
        let query: Vec<String> = params
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
