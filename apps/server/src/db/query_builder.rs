//! SQL generation for restaurant list queries
//!
//! Translates a typed [`RestaurantFilter`] into a parameterized `SELECT` over
//! the `restaurants` table. Predicates are AND-ed; `search` is an OR across
//! name, cuisine and location. Text predicates use `ILIKE` with the user's
//! input escaped, so `%` and `_` match literally.

use foodie_models::{RestaurantFilter, SortBy};

pub(crate) const RESTAURANT_COLUMNS: &str = "id, name, cuisine, location, rating, price_range, \
     delivery_time, image, description, is_open, created_at, updated_at";

#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Float(f64),
    Bool(bool),
}

/// Builder for the list/search statement.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    filter: &'a RestaurantFilter,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(filter: &'a RestaurantFilter) -> Self {
        Self { filter }
    }

    /// Build SQL and the bind values for `$1..$n`, in order.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = format!("SELECT {} FROM restaurants", RESTAURANT_COLUMNS);
        let mut bind_params = Vec::new();

        let clauses = self.where_clauses(&mut bind_params);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        sql.push_str(" ORDER BY ");
        sql.push_str(order_by(self.filter.sort_by));

        (sql, bind_params)
    }

    fn where_clauses(&self, bind_params: &mut Vec<BindValue>) -> Vec<String> {
        let filter = self.filter;
        let mut clauses = Vec::new();

        if let Some(search) = &filter.search {
            let idx = push_bind(bind_params, BindValue::Text(contains_pattern(search)));
            clauses.push(format!(
                "(name ILIKE ${0} ESCAPE '\\' OR cuisine ILIKE ${0} ESCAPE '\\' OR location ILIKE ${0} ESCAPE '\\')",
                idx
            ));
        }

        if let Some(cuisine) = &filter.cuisine {
            let idx = push_bind(bind_params, BindValue::Text(contains_pattern(cuisine)));
            clauses.push(format!("cuisine ILIKE ${} ESCAPE '\\'", idx));
        }

        if let Some(price_range) = filter.price_range {
            let idx = push_bind(
                bind_params,
                BindValue::Text(price_range.as_str().to_string()),
            );
            clauses.push(format!("price_range = ${}", idx));
        }

        if let Some(min_rating) = filter.min_rating {
            let idx = push_bind(bind_params, BindValue::Float(min_rating));
            clauses.push(format!("rating >= ${}", idx));
        }

        if let Some(is_open) = filter.is_open {
            let idx = push_bind(bind_params, BindValue::Bool(is_open));
            clauses.push(format!("is_open = ${}", idx));
        }

        clauses
    }
}

fn push_bind(bind_params: &mut Vec<BindValue>, value: BindValue) -> usize {
    bind_params.push(value);
    bind_params.len()
}

/// `price_range` holds one to four `$`, so its length is the tier.
fn order_by(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Newest => "created_at DESC, id ASC",
        SortBy::Rating => "rating DESC, created_at DESC, id ASC",
        SortBy::DeliveryTime => "delivery_time ASC, created_at DESC, id ASC",
        SortBy::PriceLow => "char_length(price_range) ASC, created_at DESC, id ASC",
        SortBy::PriceHigh => "char_length(price_range) DESC, created_at DESC, id ASC",
    }
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like_pattern(value))
}

fn escape_like_pattern(s: &str) -> String {
    // Escape SQL LIKE meta-characters so user input is treated literally.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
