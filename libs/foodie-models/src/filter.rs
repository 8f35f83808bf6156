//! List parameters and the typed filter they parse into
//!
//! `ListParams` mirrors the query string of `GET /api/restaurants` field for
//! field: every value is an optional raw string. `ListParams::into_filter`
//! turns it into a `RestaurantFilter` with explicit typed predicates.
//!
//! Parsing rules:
//! - absent and empty values are omitted
//! - `priceRange` must be one of `$`, `$$`, `$$$`, `$$$$`
//! - `minRating` must be a finite number
//! - `isOpen` must be `true` or `false` (ASCII case-insensitive)
//! - an unknown `sortBy` falls back to newest first

use crate::error::{Result, ValidationError};
use crate::restaurant::{PriceRange, Restaurant};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Raw list/search parameters as they appear on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<String>,
}

impl ListParams {
    pub fn into_filter(self) -> Result<RestaurantFilter> {
        let price_range = present(self.price_range)
            .map(|v| v.parse::<PriceRange>())
            .transpose()?;

        let min_rating = present(self.min_rating)
            .map(|v| parse_min_rating(&v))
            .transpose()?;

        let is_open = present(self.is_open)
            .map(|v| parse_bool("isOpen", &v))
            .transpose()?;

        let sort_by = present(self.sort_by)
            .map(|v| SortBy::from_param(&v))
            .unwrap_or_default();

        Ok(RestaurantFilter {
            search: present(self.search),
            cuisine: present(self.cuisine),
            price_range,
            min_rating,
            is_open,
            sort_by,
        })
    }

    /// Non-empty parameters in wire order, for building a query string.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", &self.search),
            ("cuisine", &self.cuisine),
            ("priceRange", &self.price_range),
            ("minRating", &self.min_rating),
            ("sortBy", &self.sort_by),
            ("isOpen", &self.is_open),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_min_rating(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::parameter("minRating", raw, "expected a number"))
}

fn parse_bool(param: &'static str, raw: &str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValidationError::parameter(
            param,
            raw,
            "expected 'true' or 'false'",
        ))
    }
}

/// Typed conjunctive filter plus sort order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    /// Case-insensitive substring of name, cuisine or location
    pub search: Option<String>,
    /// Case-insensitive substring of cuisine
    pub cuisine: Option<String>,
    pub price_range: Option<PriceRange>,
    /// Inclusive lower bound
    pub min_rating: Option<f64>,
    pub is_open: Option<bool>,
    pub sort_by: SortBy,
}

impl RestaurantFilter {
    /// Evaluate every predicate against a record.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(search) = &self.search {
            let hit = [
                &restaurant.name,
                &restaurant.cuisine,
                &restaurant.location,
            ]
            .into_iter()
            .any(|field| contains_ignore_case(field, search));
            if !hit {
                return false;
            }
        }

        if let Some(cuisine) = &self.cuisine {
            if !contains_ignore_case(&restaurant.cuisine, cuisine) {
                return false;
            }
        }

        if let Some(price_range) = self.price_range {
            if restaurant.price_range != price_range {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if restaurant.rating < min_rating {
                return false;
            }
        }

        if let Some(is_open) = self.is_open {
            if restaurant.is_open != is_open {
                return false;
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.cuisine.is_none()
            && self.price_range.is_none()
            && self.min_rating.is_none()
            && self.is_open.is_none()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// `createdAt` descending
    #[default]
    Newest,
    /// `rating` descending
    Rating,
    /// `deliveryTime` ascending
    DeliveryTime,
    /// price tier ascending
    PriceLow,
    /// price tier descending
    PriceHigh,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Newest,
        SortBy::Rating,
        SortBy::DeliveryTime,
        SortBy::PriceLow,
        SortBy::PriceHigh,
    ];

    /// Unknown values fall back to [`SortBy::Newest`].
    pub fn from_param(value: &str) -> Self {
        match value {
            "rating" => SortBy::Rating,
            "deliveryTime" => SortBy::DeliveryTime,
            "priceLow" => SortBy::PriceLow,
            "priceHigh" => SortBy::PriceHigh,
            _ => SortBy::Newest,
        }
    }

    /// Wire value; `None` for the default order.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortBy::Newest => None,
            SortBy::Rating => Some("rating"),
            SortBy::DeliveryTime => Some("deliveryTime"),
            SortBy::PriceLow => Some("priceLow"),
            SortBy::PriceHigh => Some("priceHigh"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Newest => "Default",
            SortBy::Rating => "Highest Rating",
            SortBy::DeliveryTime => "Fastest Delivery",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
        }
    }

    /// Total order used by in-memory stores.
    ///
    /// Ties on the sort key fall back to newest first, then id.
    pub fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        let primary = match self {
            SortBy::Newest => Ordering::Equal,
            SortBy::Rating => b.rating.total_cmp(&a.rating),
            SortBy::DeliveryTime => a.delivery_time.total_cmp(&b.delivery_time),
            SortBy::PriceLow => a.price_range.cmp(&b.price_range),
            SortBy::PriceHigh => b.price_range.cmp(&a.price_range),
        };
        primary
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}
