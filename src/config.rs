//! Runtime settings resolved from the command line, environment, and an
//! optional YAML config file.
//!
//! Precedence, highest first:
//! 1. CLI flags (and their environment variable fallbacks)
//! 2. Values from `config.yaml`
//! 3. Built-in defaults
//!
//! # Config File
//!
//! ```yaml
//! api_key: YOUR_KEY
//! from: 2025-08-05
//! sort_by: publishedAt
//! endpoint: https://newsapi.org/v2/everything
//! ```
//!
//! The credential has no default and must come from one of the sources.

use crate::cli::{Cli, SortBy};
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::path::Path;
use tracing::{info, instrument};
use url::Url;

/// Default search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Default oldest publish date.
pub const DEFAULT_FROM: &str = "2025-08-05";

/// Contents of `config.yaml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub from: Option<NaiveDate>,
    pub sort_by: Option<SortBy>,
}

/// Load a [`FileConfig`] from a YAML file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_file(path: impl AsRef<Path>) -> Result<FileConfig, Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(path.as_ref()).await?;
    let file: FileConfig = serde_yaml::from_str(&raw)?;
    info!("Loaded config file");
    Ok(file)
}

/// Fully resolved settings for one query run.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub endpoint: Url,
    pub from: NaiveDate,
    pub sort_by: SortBy,
}

// The credential is never written to logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("from", &self.from)
            .field("sort_by", &self.sort_by)
            .finish()
    }
}

impl Settings {
    /// Merge CLI arguments over the file config and built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if no credential is configured anywhere or if the
    /// endpoint is not a valid URL.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, Box<dyn Error>> {
        let api_key = cli
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or("no NewsAPI key configured (use --api-key, NEWSAPI_KEY, or api_key in config.yaml)")?;

        let endpoint = cli
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| format!("invalid endpoint URL {endpoint:?}: {e}"))?;

        let from = match cli.from.or(file.from) {
            Some(date) => date,
            None => DEFAULT_FROM.parse::<NaiveDate>()?,
        };

        let sort_by = cli.sort_by.or(file.sort_by).unwrap_or_default();

        Ok(Self {
            api_key,
            endpoint,
            from,
            sort_by,
        })
    }

    /// Resolve settings, reading the config file named on the command line
    /// when there is one.
    pub async fn load(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let file = match &cli.config {
            Some(path) => load_file(path).await?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }
}
