//! Command-line interface definitions for News Search.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The credential and config path can also be provided via environment
//! variables.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Command-line arguments for the News Search application.
///
/// # Examples
///
/// ```sh
/// # Prompt for the keyword interactively
/// NEWSAPI_KEY=YOUR_KEY news_search
///
/// # Pass the keyword directly
/// news_search "rust language" --api-key YOUR_KEY
///
/// # Search a different window, most popular first
/// news_search bitcoin --from 2025-09-01 --sort-by popularity
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keyword; prompted for when omitted
    pub keyword: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional path to a config.yaml file
    #[arg(short, long, env = "NEWS_SEARCH_CONFIG")]
    pub config: Option<String>,

    /// Oldest publish date to search from (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Search endpoint URL
    #[arg(long, hide = true)]
    pub endpoint: Option<String>,
}

/// Result orderings supported by the `everything` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevancy,
    Popularity,
    #[default]
    #[value(name = "publishedAt", alias = "published-at")]
    PublishedAt,
}

impl SortBy {
    /// The value sent in the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}
