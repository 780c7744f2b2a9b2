//! Data models for NewsAPI search responses.
//!
//! This module defines the structures decoded from the `everything` endpoint:
//! - [`SearchResult`]: The top-level response envelope
//! - [`Article`]: One news item inside the envelope
//! - [`ArticleSource`]: The publisher reference attached to an article
//!
//! Every field is optional. NewsAPI omits `articles` on error responses and
//! sends `null` for missing article fields, and both cases must print a
//! placeholder instead of failing the run. Scalar fields are read leniently:
//! a value of the wrong JSON type is kept in its JSON text form (or dropped,
//! for counts and nested objects) so one odd field never hides the other
//! articles.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder printed when an article has no title.
pub const NO_TITLE: &str = "No title";
/// Placeholder printed when an article has no description.
pub const NO_DESCRIPTION: &str = "No description";
/// Placeholder printed when an article has no URL.
pub const NO_URL: &str = "No URL";

/// The response envelope returned by the search service.
///
/// On success the service sends `status = "ok"`, a `totalResults` count and
/// the `articles` list. On failure it sends `status = "error"` together with
/// a machine-readable `code` and a human-readable `message`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// `"ok"` or `"error"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Total number of matches reported by the service (not the page size).
    #[serde(default, deserialize_with = "lenient")]
    pub total_results: Option<u64>,
    /// Articles in the order the service returned them.
    pub articles: Option<Vec<Article>>,
    /// Error description, present on error responses.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    /// Error code such as `apiKeyInvalid`, present on error responses.
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
}

impl SearchResult {
    /// The returned articles, if any were returned at all.
    ///
    /// An absent list and an empty list are treated the same.
    pub fn found_articles(&self) -> Option<&[Article]> {
        match self.articles.as_deref() {
            Some(articles) if !articles.is_empty() => Some(articles),
            _ => None,
        }
    }
}

/// A single news item.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<ArticleSource>,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient_string")]
    pub url_to_image: Option<String>,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
}

impl Article {
    /// The title, or [`NO_TITLE`].
    pub fn title_or_placeholder(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// The description, or [`NO_DESCRIPTION`].
    pub fn description_or_placeholder(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// The URL, or [`NO_URL`].
    pub fn url_or_placeholder(&self) -> &str {
        self.url.as_deref().unwrap_or(NO_URL)
    }
}

/// The publisher an article came from.
#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Read a text field, keeping non-string scalars as their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Read a typed field, dropping it when the JSON value does not fit.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Example Wire"},
                "author": "A. Writer",
                "title": "Rust 2.0 announced",
                "description": "Not really.",
                "url": "https://example.com/rust",
                "urlToImage": null,
                "publishedAt": "2025-08-06T10:00:00Z",
                "content": "..."
            }]
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status.as_deref(), Some("ok"));
        assert_eq!(result.total_results, Some(1));

        let articles = result.found_articles().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title_or_placeholder(), "Rust 2.0 announced");
        assert_eq!(
            articles[0].source.as_ref().and_then(|s| s.name.as_deref()),
            Some("Example Wire")
        );
        assert_eq!(
            articles[0].published_at.as_deref(),
            Some("2025-08-06T10:00:00Z")
        );
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Invalid apiKey"
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status.as_deref(), Some("error"));
        assert_eq!(result.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(result.message.as_deref(), Some("Invalid apiKey"));
        assert!(result.articles.is_none());
        assert!(result.found_articles().is_none());
    }

    #[test]
    fn test_empty_articles_are_not_found() {
        let result: SearchResult =
            serde_json::from_str(r#"{"status": "ok", "totalResults": 0, "articles": []}"#).unwrap();
        assert!(result.found_articles().is_none());
    }

    #[test]
    fn test_placeholders_for_missing_and_null_fields() {
        let article: Article =
            serde_json::from_str(r#"{"title": null, "url": "https://example.com"}"#).unwrap();

        assert_eq!(article.title_or_placeholder(), NO_TITLE);
        assert_eq!(article.description_or_placeholder(), NO_DESCRIPTION);
        assert_eq!(article.url_or_placeholder(), "https://example.com");
    }

    #[test]
    fn test_wrongly_typed_scalars_do_not_fail_the_response() {
        let json = r#"{
            "status": 5,
            "totalResults": "many",
            "articles": [
                {"title": 123, "description": true, "url": "https://example.com/a", "source": "wire"},
                {"title": "Fine", "description": "Also fine", "url": "https://example.com/b"}
            ]
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status.as_deref(), Some("5"));
        assert_eq!(result.total_results, None);

        let articles = result.found_articles().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title_or_placeholder(), "123");
        assert_eq!(articles[0].description_or_placeholder(), "true");
        assert!(articles[0].source.is_none());
        assert_eq!(articles[1].title_or_placeholder(), "Fine");
    }

    #[test]
    fn test_articles_must_be_a_list() {
        let result = serde_json::from_str::<SearchResult>(r#"{"articles": "nope"}"#);
        assert!(result.is_err());
    }
}
