//! Interactive browse session
//!
//! Reads stdin line by line. Plain text becomes the search input and is
//! applied after the debounce period; `:` commands change the other filters
//! and refetch immediately.

use anyhow::Context;
use foodie_client::{Error as ClientError, RestaurantClient};
use foodie_models::{PriceRange, Restaurant, SortBy};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    debounce::{Debouncer, SEARCH_DEBOUNCE},
    render,
    state::{DirectoryState, FilterChange},
};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Search(String),
    Filter(FilterChange),
    Clear,
    Seed,
    Help,
    Quit,
    Invalid(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Input::Search(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        // "all", "any" and an empty argument reset a filter
        let value = match arg {
            "" => None,
            a if a.eq_ignore_ascii_case("all") || a.eq_ignore_ascii_case("any") => None,
            a => Some(a.to_string()),
        };

        match name {
            "cuisine" => Input::Filter(FilterChange::Cuisine(value)),
            "price" => match value {
                Some(v) => match v.parse::<PriceRange>() {
                    Ok(p) => Input::Filter(FilterChange::PriceRange(Some(p.to_string()))),
                    Err(e) => Input::Invalid(e.to_string()),
                },
                None => Input::Filter(FilterChange::PriceRange(None)),
            },
            "rating" => match value {
                Some(v) => match v.parse::<f64>() {
                    Ok(r) if (0.0..=5.0).contains(&r) => {
                        Input::Filter(FilterChange::MinRating(Some(v)))
                    }
                    _ => Input::Invalid(format!("Minimum rating must be 0 to 5, got {v:?}")),
                },
                None => Input::Filter(FilterChange::MinRating(None)),
            },
            "sort" => match value {
                Some(v) if v == "default" => Input::Filter(FilterChange::SortBy(None)),
                Some(v) => match SortBy::from_param(&v).as_param() {
                    Some(param) => Input::Filter(FilterChange::SortBy(Some(param.to_string()))),
                    None => Input::Invalid(format!("Unknown sort {v:?}")),
                },
                None => Input::Filter(FilterChange::SortBy(None)),
            },
            "open" => match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
                None => Input::Filter(FilterChange::IsOpen(None)),
                Some(v @ ("true" | "false")) => {
                    Input::Filter(FilterChange::IsOpen(Some(v.to_string())))
                }
                Some(_) => Input::Invalid("Use :open true, :open false or :open any".to_string()),
            },
            "clear" => Input::Clear,
            "seed" => Input::Seed,
            "help" | "h" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            other => Input::Invalid(format!("Unknown command :{other} (try :help)")),
        }
    }
}

type FetchResult = Result<Vec<Restaurant>, ClientError>;

/// Mark the state as loading and fetch in the background.
///
/// Fetches are never cancelled; each result is applied as it arrives.
fn spawn_fetch(
    client: &RestaurantClient,
    state: &mut DirectoryState,
    results: &mpsc::UnboundedSender<FetchResult>,
) {
    state.begin_fetch();
    println!("{}", render::results(state));

    let client = client.clone();
    let params = state.filters.clone();
    let results = results.clone();
    tokio::spawn(async move {
        let result = client.list_restaurants(&params).await;
        let _ = results.send(result);
    });
}

pub async fn run(client: RestaurantClient) -> anyhow::Result<()> {
    let mut state = DirectoryState::default();

    match client.cuisines().await {
        Ok(cuisines) => state.cuisines = cuisines,
        Err(e) => tracing::error!(error = %e, "Failed to load cuisines"),
    }

    let (mut debouncer, mut searches) = Debouncer::new(SEARCH_DEBOUNCE);
    let (results_tx, mut results) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n{}\n", render::header(), render::help());
    println!("{}", render::cuisine_choices(&state.cuisines));
    spawn_fetch(&client, &mut state, &results_tx);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match Input::parse(&line) {
                    Input::Search(text) => {
                        state.search_input = text.clone();
                        debouncer.push(text);
                    }
                    Input::Filter(change) => {
                        state.apply_change(change);
                        spawn_fetch(&client, &mut state, &results_tx);
                    }
                    Input::Clear => {
                        debouncer.cancel();
                        state.clear();
                        spawn_fetch(&client, &mut state, &results_tx);
                    }
                    Input::Seed => {
                        if state.finish_seed(client.seed().await) {
                            spawn_fetch(&client, &mut state, &results_tx);
                        }
                        if let Some(notice) = state.take_notice() {
                            println!("{notice}");
                        }
                    }
                    Input::Help => println!("{}", render::help()),
                    Input::Quit => break,
                    Input::Invalid(message) => eprintln!("{message}"),
                }
            }
            Some(search) = searches.recv() => {
                state.apply_search(search);
                spawn_fetch(&client, &mut state, &results_tx);
            }
            Some(result) = results.recv() => {
                state.finish_fetch(result);
                println!("\n{}\n", render::page(&state));
            }
        }
    }

    Ok(())
}
