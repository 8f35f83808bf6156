//! Command-line interface definition

use clap::{Args, Parser, Subcommand};
use foodie_client::DEFAULT_API_URL;
use foodie_models::{ListParams, PriceRange, RestaurantPayload};

#[derive(Debug, Parser)]
#[command(name = "foodie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Browse and manage the Foodie restaurant directory")]
pub struct Cli {
    /// Base URL of the directory API
    #[arg(long, global = true, env = "FOODIE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List restaurants, optionally filtered and sorted
    List(ListArgs),
    /// Show the distinct cuisines in the directory
    Cuisines,
    /// Insert the sample restaurants
    Seed,
    /// Add a restaurant
    Create(CreateArgs),
    /// Interactive search session reading from stdin
    Browse,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Text matched against name, cuisine and location
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(short, long)]
    pub cuisine: Option<String>,
    /// One of $, $$, $$$, $$$$
    #[arg(short, long)]
    pub price_range: Option<String>,
    #[arg(short, long)]
    pub min_rating: Option<String>,
    /// rating | deliveryTime | priceLow | priceHigh
    #[arg(long)]
    pub sort_by: Option<String>,
    /// true | false
    #[arg(long)]
    pub is_open: Option<String>,
}

impl From<ListArgs> for ListParams {
    fn from(args: ListArgs) -> Self {
        ListParams {
            search: args.search,
            cuisine: args.cuisine,
            price_range: args.price_range,
            min_rating: args.min_rating,
            sort_by: args.sort_by,
            is_open: args.is_open,
        }
    }
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub cuisine: String,
    #[arg(long)]
    pub location: String,
    /// 0 to 5
    #[arg(long)]
    pub rating: f64,
    /// One of $, $$, $$$, $$$$
    #[arg(long)]
    pub price_range: PriceRange,
    /// Minutes
    #[arg(long, allow_negative_numbers = true)]
    pub delivery_time: f64,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Mark the restaurant as currently closed
    #[arg(long)]
    pub closed: bool,
}

impl From<CreateArgs> for RestaurantPayload {
    fn from(args: CreateArgs) -> Self {
        RestaurantPayload {
            name: Some(args.name),
            cuisine: Some(args.cuisine),
            location: Some(args.location),
            rating: Some(args.rating),
            price_range: Some(args.price_range),
            delivery_time: Some(args.delivery_time),
            image: args.image,
            description: args.description,
            is_open: Some(!args.closed),
        }
    }
}
