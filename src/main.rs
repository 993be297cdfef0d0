//! Dog Breeds CLI - Look up dog sub-breeds
//!
//! Fetches the sub-breeds of each breed given on the command line from the
//! dog.ceo API, reusing cached results for repeated breeds.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dogbreeds::cli::{Cli, OutputFormat, StartupConfig};
use dogbreeds::output::{render_json, render_text, BreedLookup};
use dogbreeds::{BreedSource, CachingBreedSource, DogApiClient};

/// Exit status for invalid arguments, matching clap's usage errors
const EXIT_USAGE: u8 = 2;

/// Installs a stderr logger; RUST_LOG takes precedence over `--log-level`
fn init_logging(level: Level) {
    let default_filter = format!("dogbreeds={}", level.as_str().to_lowercase());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    init_logging(config.log_level);
    debug!(base_url = %config.base_url, breeds = config.breeds.len(), "starting lookups");

    let client = DogApiClient::new().with_base_url(config.base_url.clone());
    let source = CachingBreedSource::new(Arc::new(client));

    // Sequential: a repeated breed must find the earlier result cached
    let mut lookups = Vec::with_capacity(config.breeds.len());
    let mut any_failed = false;
    for breed in &config.breeds {
        match source.get_sub_breeds(breed).await {
            Ok(sub_breeds) => {
                let lookup = BreedLookup::new(breed.as_str(), sub_breeds);
                if config.output == OutputFormat::Text {
                    println!("{}", render_text(&lookup));
                }
                lookups.push(lookup);
            }
            Err(e) => {
                any_failed = true;
                eprintln!("error: {}", e);
            }
        }
    }

    if config.output == OutputFormat::Json {
        println!("{}", render_json(&lookups)?);
    }

    if config.show_stats {
        eprintln!("calls made: {}", source.calls_made());
        eprintln!("cached breeds: {}", source.cached_breeds());
    }

    Ok(if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
