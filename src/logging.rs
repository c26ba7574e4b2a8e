//! Diagnostic logging for the command-line tools
//!
//! Diagnostics go to stderr through `tracing`; the tools' own report lines (generated
//! paths, lint results) are printed to stdout and are not affected by these settings.
//!
//! | variable | default | meaning |
//! |----------|---------|---------|
//! | `STANDARDIZE_LOG_LEVEL` | `warn` | `trace`, `debug`, `info`, `warn` or `error` |
//! | `STANDARDIZE_LOG_FORMAT` | `pretty` | `pretty` or `json` |
//! | `STANDARDIZE_LOG_TARGETS` | unset | extra comma-separated filter directives |
//! | `STANDARDIZE_LOG_LOCATION` | `false` | include file and line in each event |
//! | `RUST_LOG` | unset | replaces the level-based filter entirely |

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: pretty for terminals, JSON for CI log collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_level: String,
    pub format: LogFormat,
    /// Comma-separated `EnvFilter` directives added on top of the level
    pub target_filter: Option<String>,
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Read `STANDARDIZE_LOG_*` variables, falling back to [`LogConfig::default`].
    pub fn from_env() -> Self {
        let defaults = LogConfig::default();
        LogConfig {
            log_level: env::var("STANDARDIZE_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("STANDARDIZE_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            target_filter: env::var("STANDARDIZE_LOG_TARGETS")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            include_location: env::var("STANDARDIZE_LOG_LOCATION")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.include_location),
        }
    }
}

/// Parse a level name; unknown names fall back to `warn`.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Build the event filter: `RUST_LOG` if set, else the configured level plus target directives.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    let level = parse_level(&config.log_level);
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if let Some(targets) = &config.target_filter {
        for directive in targets.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(_) => eprintln!("Warning: Invalid log filter directive: {directive}"),
            }
        }
    }
    filter
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}
