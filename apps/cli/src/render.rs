//! Plain-text rendering of the directory for the terminal

use colored::{Color, Colorize};
use foodie_models::{PriceRange, Restaurant, SortBy};

use crate::state::DirectoryState;

pub const FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Restaurant";
pub const SEARCH_PLACEHOLDER: &str = "Search restaurants, cuisines, or locations...";

const ORANGE: Color = Color::TrueColor {
    r: 249,
    g: 115,
    b: 22,
};

/// Rating thresholds, highest first: >= 4.5, >= 4.0, >= 3.5, below.
pub fn badge_color(rating: f64) -> Color {
    if rating >= 4.5 {
        Color::BrightGreen
    } else if rating >= 4.0 {
        Color::Green
    } else if rating >= 3.5 {
        Color::Yellow
    } else {
        ORANGE
    }
}

pub fn rating_badge(rating: f64) -> String {
    format!("★ {:.1}", rating)
        .bold()
        .color(badge_color(rating))
        .to_string()
}

pub fn header() -> String {
    format!(
        "{}  {}",
        "🍽️  Foodie".bold().color(ORANGE),
        "(:seed loads sample data)".dimmed()
    )
}

pub fn search_line(input: &str) -> String {
    if input.is_empty() {
        format!("🔍 {}", SEARCH_PLACEHOLDER.dimmed())
    } else {
        format!("🔍 {}", input)
    }
}

fn cuisine_label(cuisine: Option<&str>) -> &str {
    cuisine.unwrap_or("All Cuisines")
}

fn price_label(price: Option<&str>) -> String {
    match price {
        None => "All Prices".to_string(),
        Some(raw) => raw
            .parse::<PriceRange>()
            .map(|p| format!("{} ({})", p.label(), p))
            .unwrap_or_else(|_| raw.to_string()),
    }
}

fn rating_label(min_rating: Option<&str>) -> String {
    match min_rating {
        None => "All Ratings".to_string(),
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => format!("{:.1}+ ⭐", value),
            Err(_) => raw.to_string(),
        },
    }
}

fn sort_label(sort_by: Option<&str>) -> &'static str {
    sort_by.map(SortBy::from_param).unwrap_or_default().label()
}

fn open_label(is_open: Option<&str>) -> &str {
    match is_open {
        None => "Any",
        Some(v) if v.eq_ignore_ascii_case("true") => "Open now",
        Some(v) if v.eq_ignore_ascii_case("false") => "Closed",
        Some(v) => v,
    }
}

/// One line summarising every filter control.
pub fn filter_line(state: &DirectoryState) -> String {
    let filters = &state.filters;
    format!(
        "Cuisine: {} | Price: {} | Rating: {} | Sort: {} | Open: {}",
        cuisine_label(filters.cuisine.as_deref()),
        price_label(filters.price_range.as_deref()),
        rating_label(filters.min_rating.as_deref()),
        sort_label(filters.sort_by.as_deref()),
        open_label(filters.is_open.as_deref()),
    )
}

pub fn cuisine_choices(cuisines: &[String]) -> String {
    let mut choices = vec!["All Cuisines"];
    choices.extend(cuisines.iter().map(String::as_str));
    format!("Cuisines: {}", choices.join(", "))
}

pub fn result_count(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Found {} restaurant{}", count.to_string().bold(), suffix)
}

pub fn card(restaurant: &Restaurant) -> String {
    let image = if restaurant.image.trim().is_empty() {
        FALLBACK_IMAGE_URL
    } else {
        restaurant.image.as_str()
    };

    let mut lines = vec![
        format!(
            "{}  {}",
            restaurant.name.bold(),
            rating_badge(restaurant.rating)
        ),
        format!("{} • {}", restaurant.cuisine, restaurant.location),
    ];
    if let Some(description) = &restaurant.description {
        lines.push(description.dimmed().to_string());
    }
    lines.push(format!(
        "{}  ⏱ {} min  {}",
        restaurant.price_range.as_str().bold(),
        restaurant.delivery_time,
        "[Order Now]".color(ORANGE)
    ));
    lines.push(image.dimmed().to_string());

    lines.join("\n")
}

/// Results area: loading, error, empty and populated states are exclusive.
pub fn results(state: &DirectoryState) -> String {
    if state.loading {
        return "Loading restaurants...".dimmed().to_string();
    }
    if let Some(error) = &state.error {
        return error.red().to_string();
    }
    if state.restaurants.is_empty() {
        return format!(
            "{}\n{}",
            "No restaurants found".bold(),
            "Try adjusting your search or filters".dimmed()
        );
    }

    let cards: Vec<String> = state.restaurants.iter().map(card).collect();
    format!("{}\n\n{}", result_count(state.restaurants.len()), cards.join("\n\n"))
}

pub fn page(state: &DirectoryState) -> String {
    [
        header(),
        search_line(&state.search_input),
        filter_line(state),
        String::new(),
        results(state),
    ]
    .join("\n")
}

pub fn help() -> String {
    [
        "Type to search. Commands:",
        "  :cuisine <name|all>      :price <$..$$$$|all>   :rating <min|all>",
        "  :sort <rating|deliveryTime|priceLow|priceHigh|default>",
        "  :open <true|false|any>   :clear   :seed   :help   :quit",
    ]
    .join("\n")
}
