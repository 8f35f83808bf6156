//! The restaurant record and its create payload

use crate::error::{Result, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Image used when a restaurant is created without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/958545/pexels-photo-958545.jpeg";

/// A stored restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub cuisine: String,

    pub location: String,

    /// 0.0 to 5.0 inclusive
    pub rating: f64,

    pub price_range: PriceRange,

    /// Minutes, not negative
    pub delivery_time: f64,

    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_open: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Price tier, ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    VeryExpensive,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Expensive,
        PriceRange::VeryExpensive,
    ];

    /// Wire symbol (`$` .. `$$$$`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Expensive => "$$$",
            PriceRange::VeryExpensive => "$$$$",
        }
    }

    /// 1-based tier; the number of `$` signs.
    pub fn tier(&self) -> i16 {
        match self {
            PriceRange::Budget => 1,
            PriceRange::Moderate => 2,
            PriceRange::Expensive => 3,
            PriceRange::VeryExpensive => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Budget => "Budget",
            PriceRange::Moderate => "Moderate",
            PriceRange::Expensive => "Expensive",
            PriceRange::VeryExpensive => "Very Expensive",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        PriceRange::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::PriceRange(s.to_string()))
    }
}

/// Create payload as received from clients.
///
/// Every field is optional on the wire so that a partial body produces a
/// validation error naming what is missing rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(
        required(message = "cuisine is required"),
        length(min = 1, message = "cuisine must not be empty")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    #[validate(
        required(message = "location is required"),
        length(min = 1, message = "location must not be empty")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[validate(
        required(message = "rating is required"),
        range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[validate(required(message = "priceRange is required"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,

    #[validate(
        required(message = "deliveryTime is required"),
        range(min = 0.0, message = "deliveryTime must not be negative")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

impl RestaurantPayload {
    /// Trim, apply defaults and validate.
    pub fn into_new_restaurant(self) -> Result<NewRestaurant> {
        let payload = self.normalized();
        payload.validate()?;

        // validate() guarantees the required fields are present
        match payload {
            RestaurantPayload {
                name: Some(name),
                cuisine: Some(cuisine),
                location: Some(location),
                rating: Some(rating),
                price_range: Some(price_range),
                delivery_time: Some(delivery_time),
                image,
                description,
                is_open,
            } => Ok(NewRestaurant {
                name,
                cuisine,
                location,
                rating,
                price_range,
                delivery_time,
                image: image.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
                description,
                is_open: is_open.unwrap_or(true),
            }),
            _ => Err(ValidationError::Payload(vec![
                "required fields are missing".to_string(),
            ])),
        }
    }

    fn normalized(self) -> Self {
        let trim = |s: Option<String>| s.map(|v| v.trim().to_string());
        let non_blank = |s: Option<String>| trim(s).filter(|v| !v.is_empty());
        Self {
            name: trim(self.name),
            cuisine: trim(self.cuisine),
            location: trim(self.location),
            rating: self.rating,
            price_range: self.price_range,
            delivery_time: self.delivery_time,
            image: non_blank(self.image),
            description: non_blank(self.description),
            is_open: self.is_open,
        }
    }
}

/// A validated restaurant that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f64,
    pub price_range: PriceRange,
    pub delivery_time: f64,
    pub image: String,
    pub description: Option<String>,
    pub is_open: bool,
}

impl NewRestaurant {
    /// Attach store-assigned identity and timestamps.
    pub fn into_restaurant(self, id: String, now: DateTime<Utc>) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            cuisine: self.cuisine,
            location: self.location,
            rating: self.rating,
            price_range: self.price_range,
            delivery_time: self.delivery_time,
            image: self.image,
            description: self.description,
            is_open: self.is_open,
            created_at: now,
            updated_at: now,
        }
    }
}
