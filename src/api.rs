//! NewsAPI interaction.
//!
//! # Architecture
//!
//! - [`SearchAsync`]: Core trait defining one async keyword search
//! - [`NewsApiClient`]: reqwest implementation against the `everything` endpoint
//!
//! A search performs exactly one GET request. There is no retry and no
//! explicit timeout; the reqwest defaults apply.

use crate::config::Settings;
use crate::error::QueryError;
use crate::models::SearchResult;
use crate::utils::truncate_for_log;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// A decoded response together with the body it was decoded from.
#[derive(Debug)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub body: String,
}

/// Trait for async keyword searches.
///
/// Implementors send one keyword to a search service and return the decoded
/// response.
pub trait SearchAsync {
    /// Search for articles matching `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Transport`] if the request fails or the service
    /// answers with a non-2xx status, [`QueryError::Decode`] if the body is
    /// not JSON, and [`QueryError::Shape`] if the JSON does not match
    /// [`SearchResult`].
    async fn search(&self, keyword: &str) -> Result<SearchOutcome, QueryError>;
}

/// Client for the NewsAPI `everything` endpoint.
pub struct NewsApiClient {
    client: reqwest::Client,
    settings: Settings,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("settings", &self.settings)
            .finish()
    }
}

impl NewsApiClient {
    /// Create a client for the given settings.
    pub fn new(settings: Settings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, settings }
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.settings.endpoint
    }

    fn query_params<'a>(&'a self, keyword: &'a str, from: &'a str) -> [(&'a str, &'a str); 4] {
        [
            ("q", keyword),
            ("from", from),
            ("sortBy", self.settings.sort_by.as_str()),
            ("apiKey", self.settings.api_key.as_str()),
        ]
    }
}

impl SearchAsync for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(%keyword))]
    async fn search(&self, keyword: &str) -> Result<SearchOutcome, QueryError> {
        let t0 = Instant::now();
        let from = self.settings.from.format("%Y-%m-%d").to_string();

        let response = self
            .client
            .get(self.settings.endpoint.clone())
            .query(&self.query_params(keyword, &from))
            .send()
            .await?;

        let status = response.status();
        let checked = response.error_for_status_ref().map(|_| ());
        if let Err(e) = checked {
            // Read the body for the log only; it is not decoded.
            let body = response.text().await.unwrap_or_default();
            warn!(
                %status,
                elapsed_ms = t0.elapsed().as_millis(),
                body_preview = %truncate_for_log(&body, 300),
                "Search service returned an error status"
            );
            return Err(e.into());
        }

        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Received search response");

        let value: serde_json::Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(source) => {
                warn!(
                    error = %source,
                    body_preview = %truncate_for_log(&body, 300),
                    "Response body is not JSON"
                );
                return Err(QueryError::Decode { source, body });
            }
        };

        let result: SearchResult = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(source) => {
                warn!(
                    error = %source,
                    body_preview = %truncate_for_log(&body, 300),
                    "Response JSON has an unexpected shape"
                );
                return Err(QueryError::Shape { source, body });
            }
        };

        info!(
            %status,
            api_status = result.status.as_deref().unwrap_or_default(),
            api_code = result.code.as_deref().unwrap_or_default(),
            total_results = result.total_results.unwrap_or_default(),
            returned = result.articles.as_ref().map_or(0, Vec::len),
            elapsed_ms = t0.elapsed().as_millis(),
            "Search completed"
        );

        Ok(SearchOutcome { result, body })
    }
}
