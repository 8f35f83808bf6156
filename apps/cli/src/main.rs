//! Foodie - terminal frontend for the restaurant directory

mod args;
mod browse;
mod commands;
mod debounce;
mod render;
mod state;

use anyhow::Context;
use clap::Parser;
use foodie_client::RestaurantClient;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the rendered directory, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("foodie=warn,foodie_client=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let client = RestaurantClient::with_base_url(cli.api_url)
        .context("Failed to build HTTP client")?;
    tracing::debug!(api_url = client.base_url(), "Using directory API");

    match cli.command {
        Commands::List(args) => commands::list(&client, args.into()).await,
        Commands::Cuisines => commands::cuisines(&client).await,
        Commands::Seed => commands::seed(&client).await,
        Commands::Create(args) => commands::create(&client, args.into()).await,
        Commands::Browse => browse::run(client).await,
    }
}
