//! # News Search
//!
//! A small console client for the [NewsAPI](https://newsapi.org) `everything`
//! endpoint. It takes one keyword, runs one search, and prints the title,
//! description, and link of every returned article.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=YOUR_KEY news_search "renewable energy"
//! ```
//!
//! Without a keyword argument the program prompts for one.
//!
//! ## Flow
//!
//! 1. **Settings**: Merge CLI flags, environment, and `config.yaml`
//! 2. **Keyword**: Take it from the arguments or prompt on stdin
//! 3. **Search**: One GET request with encoded query parameters
//! 4. **Output**: Print the results, or the failure, to stdout
//!
//! Logs go to stderr and are controlled with `RUST_LOG`.

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod runner;
mod utils;

use api::NewsApiClient;
use cli::Cli;
use config::Settings;
use runner::run_query;
use utils::prompt_keyword;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_search starting up");

    let args = Cli::parse();
    debug!(keyword = ?args.keyword, config = ?args.config, "Parsed CLI arguments");

    let settings = Settings::load(&args).await?;
    info!(?settings, "Resolved settings");

    let keyword = match args.keyword {
        Some(keyword) => keyword,
        None => prompt_keyword(io::stdin().lock(), io::stdout())?,
    };

    let client = NewsApiClient::new(settings);
    debug!(endpoint = %client.endpoint(), "Created search client");

    let mut stdout = io::stdout().lock();
    run_query(&client, &keyword, &mut stdout).await?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
