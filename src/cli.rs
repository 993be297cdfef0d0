//! Command-line interface parsing for the Dog Breeds CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `StartupConfig` for the binary.

use clap::Parser;
use reqwest::Url;
use thiserror::Error;
use tracing::Level;

use crate::data::dog_api::DOG_API_BASE_URL;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The API base URL could not be parsed or is not http(s)
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The log level is not one of the known levels
    #[error("Invalid log level: '{0}'. Valid levels: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Dog Breeds CLI - Look up the sub-breeds of dog breeds
#[derive(Parser, Debug)]
#[command(name = "dogbreeds")]
#[command(about = "Look up dog sub-breeds from the dog.ceo API")]
#[command(version)]
pub struct Cli {
    /// Breeds to look up, in order
    ///
    /// Repeated breeds (in any case or spacing) are served from the cache.
    ///
    /// Examples:
    ///   dogbreeds hound
    ///   dogbreeds retriever " Retriever " terrier --stats
    #[arg(value_name = "BREED", required = true)]
    pub breeds: Vec<String>,

    /// Base URL of the dog.ceo compatible API
    #[arg(long, value_name = "URL", env = "DOG_API_BASE_URL", default_value = DOG_API_BASE_URL)]
    pub base_url: String,

    /// Print results as a JSON array instead of text
    #[arg(long)]
    pub json: bool,

    /// Print cache statistics to stderr when done
    #[arg(long)]
    pub stats: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(short = 'v', long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// How lookup results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `breed: sub, sub` line per breed
    Text,
    /// A single JSON array once all lookups finish
    Json,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Breeds to look up, in argument order
    pub breeds: Vec<String>,
    /// Validated API base URL without a trailing slash
    pub base_url: String,
    /// Output format for results
    pub output: OutputFormat,
    /// Whether to print cache statistics
    pub show_stats: bool,
    /// Default log level for this crate
    pub log_level: Level,
}

/// Parses and validates an API base URL argument.
///
/// # Returns
/// * `Ok(String)` with any trailing slash removed
/// * `Err(CliError::InvalidBaseUrl)` if the URL is malformed or not http(s)
pub fn parse_base_url_arg(s: &str) -> Result<String, CliError> {
    let url = Url::parse(s.trim()).map_err(|_| CliError::InvalidBaseUrl(s.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(s.trim().trim_end_matches('/').to_string()),
        _ => Err(CliError::InvalidBaseUrl(s.to_string())),
    }
}

/// Parses a log level argument such as `info` or `DEBUG`.
pub fn parse_log_level_arg(s: &str) -> Result<Level, CliError> {
    s.parse::<Level>()
        .map_err(|_| CliError::InvalidLogLevel(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the base URL or log level is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let output = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(StartupConfig {
            breeds: cli.breeds.clone(),
            base_url: parse_base_url_arg(&cli.base_url)?,
            output,
            show_stats: cli.stats,
            log_level: parse_log_level_arg(&cli.log_level)?,
        })
    }
}
