//! Logging initialization for the server binary
//!
//! One console layer, plus an optional rolling file layer, both filtered by
//! the same `EnvFilter`. `RUST_LOG` replaces the configured level entirely.

use std::fs;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Flushes buffered file output on drop; hold it until the server exits.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.json)];

    let file_guard = if config.file_enabled {
        let (writer, guard) = file_writer(config)?;
        layers.push(file_layer(config.json, writer));
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers.with_filter(env_filter(&config.level)))
        .try_init()?;

    tracing::info!(
        level = %config.level,
        json = config.json,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "foodie_server={level},foodie={level},tower_http=debug,sqlx=warn"
        ))
    })
}

fn console_layer(json: bool) -> BoxedLayer {
    if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stdout)
            .boxed()
    }
}

fn file_layer(json: bool, writer: NonBlocking) -> BoxedLayer {
    if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    }
}

fn file_writer(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let rotation = rotation(&config.file_rotation);
    let prefix = if rotation == Rotation::NEVER {
        format!("{}.log", config.file_prefix)
    } else {
        config.file_prefix.clone()
    };

    let appender = RollingFileAppender::new(rotation, &config.file_directory, prefix);
    Ok(tracing_appender::non_blocking(appender))
}

/// Map a validated rotation name; anything unrecognised rolls daily.
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "minutely" => Rotation::MINUTELY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
