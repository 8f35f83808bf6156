//! Sample restaurants inserted by `POST /api/restaurants/seed`

use foodie_models::{NewRestaurant, PriceRange, DEFAULT_IMAGE_URL};

/// Message returned alongside the inserted count
pub const SEED_MESSAGE: &str = "Sample data seeded successfully";

struct Sample {
    name: &'static str,
    cuisine: &'static str,
    location: &'static str,
    rating: f64,
    price_range: PriceRange,
    delivery_time: f64,
    description: &'static str,
    is_open: bool,
}

const SAMPLES: [Sample; 10] = [
    Sample {
        name: "Spice Garden",
        cuisine: "Indian",
        location: "Downtown",
        rating: 4.5,
        price_range: PriceRange::Moderate,
        delivery_time: 30.0,
        description: "Authentic Indian cuisine with a modern twist",
        is_open: true,
    },
    Sample {
        name: "Pizza Paradise",
        cuisine: "Italian",
        location: "Midtown",
        rating: 4.2,
        price_range: PriceRange::Moderate,
        delivery_time: 25.0,
        description: "Wood-fired pizzas and pasta",
        is_open: true,
    },
    Sample {
        name: "Sushi Master",
        cuisine: "Japanese",
        location: "Uptown",
        rating: 4.8,
        price_range: PriceRange::Expensive,
        delivery_time: 35.0,
        description: "Fresh sushi and sashimi",
        is_open: true,
    },
    Sample {
        name: "Burger King",
        cuisine: "American",
        location: "Downtown",
        rating: 4.0,
        price_range: PriceRange::Budget,
        delivery_time: 20.0,
        description: "Classic American burgers and fries",
        is_open: true,
    },
    Sample {
        name: "Dragon Palace",
        cuisine: "Chinese",
        location: "Chinatown",
        rating: 4.3,
        price_range: PriceRange::Moderate,
        delivery_time: 28.0,
        description: "Traditional Chinese dishes",
        is_open: true,
    },
    Sample {
        name: "Taco Fiesta",
        cuisine: "Mexican",
        location: "Southside",
        rating: 4.6,
        price_range: PriceRange::Budget,
        delivery_time: 22.0,
        description: "Authentic Mexican street food",
        is_open: true,
    },
    Sample {
        name: "Le Bistro",
        cuisine: "French",
        location: "Uptown",
        rating: 4.7,
        price_range: PriceRange::Expensive,
        delivery_time: 40.0,
        description: "Fine French dining",
        is_open: true,
    },
    Sample {
        name: "Thai Orchid",
        cuisine: "Thai",
        location: "Midtown",
        rating: 4.4,
        price_range: PriceRange::Moderate,
        delivery_time: 32.0,
        description: "Spicy and flavorful Thai cuisine",
        is_open: true,
    },
    Sample {
        name: "Mediterranean Delight",
        cuisine: "Mediterranean",
        location: "Downtown",
        rating: 4.5,
        price_range: PriceRange::Moderate,
        delivery_time: 30.0,
        description: "Fresh Mediterranean flavors",
        is_open: true,
    },
    Sample {
        name: "BBQ Smokehouse",
        cuisine: "American",
        location: "Northside",
        rating: 4.1,
        price_range: PriceRange::Expensive,
        delivery_time: 45.0,
        description: "Slow-smoked meats and BBQ",
        is_open: false,
    },
];

/// The fixed sample set, ready to store.
pub fn sample_restaurants() -> Vec<NewRestaurant> {
    SAMPLES
        .iter()
        .map(|s| NewRestaurant {
            name: s.name.to_string(),
            cuisine: s.cuisine.to_string(),
            location: s.location.to_string(),
            rating: s.rating,
            price_range: s.price_range,
            delivery_time: s.delivery_time,
            image: DEFAULT_IMAGE_URL.to_string(),
            description: Some(s.description.to_string()),
            is_open: s.is_open,
        })
        .collect()
}
