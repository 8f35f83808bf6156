//! Browse session state: active filters, fetched results, loading and error

use foodie_client::Error as ClientError;
use foodie_models::{ListParams, Restaurant};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch restaurants. Please try again later.";
pub const SEED_SUCCESS_MESSAGE: &str = "Sample data seeded successfully!";
pub const SEED_FAILURE_MESSAGE: &str = "Failed to seed data. Make sure the backend is running.";

/// One filter control changing value; `None` resets it to "all".
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Cuisine(Option<String>),
    PriceRange(Option<String>),
    MinRating(Option<String>),
    SortBy(Option<String>),
    IsOpen(Option<String>),
}

#[derive(Debug, Default)]
pub struct DirectoryState {
    /// Filters sent with the next fetch; `search` only changes once debounced
    pub filters: ListParams,
    /// Search text as typed, before debouncing
    pub search_input: String,
    pub cuisines: Vec<String>,
    pub restaurants: Vec<Restaurant>,
    pub loading: bool,
    pub error: Option<String>,
    /// One-off message from the last action (seed)
    pub notice: Option<String>,
}

impl DirectoryState {
    pub fn apply_change(&mut self, change: FilterChange) {
        let filters = &mut self.filters;
        match change {
            FilterChange::Cuisine(v) => filters.cuisine = v,
            FilterChange::PriceRange(v) => filters.price_range = v,
            FilterChange::MinRating(v) => filters.min_rating = v,
            FilterChange::SortBy(v) => filters.sort_by = v,
            FilterChange::IsOpen(v) => filters.is_open = v,
        }
    }

    pub fn apply_search(&mut self, search: String) {
        self.filters.search = Some(search).filter(|s| !s.is_empty());
    }

    /// Reset every filter and the search text.
    pub fn clear(&mut self) {
        self.filters = ListParams::default();
        self.search_input.clear();
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a completed fetch. Whichever fetch completes last wins.
    pub fn finish_fetch(&mut self, result: Result<Vec<Restaurant>, ClientError>) {
        self.loading = false;
        match result {
            Ok(restaurants) => {
                self.restaurants = restaurants;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching restaurants");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub fn finish_seed<T>(&mut self, result: Result<T, ClientError>) -> bool {
        match result {
            Ok(_) => {
                self.notice = Some(SEED_SUCCESS_MESSAGE.to_string());
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error seeding data");
                self.notice = Some(SEED_FAILURE_MESSAGE.to_string());
                false
            }
        }
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
