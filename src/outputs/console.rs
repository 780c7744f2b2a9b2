//! Plain-text console rendering.
//!
//! # Output Layout
//!
//! ```text
//! API Response status: ok
//! Total results: 2
//!
//! Found 2 articles:
//!
//! Title: ...
//! Description: ...
//! URL: ...
//! --------------------------------------
//! ```

use crate::error::QueryError;
use crate::models::{Article, SearchResult};
use std::fmt::Display;
use std::io::{self, Write};

/// Line printed after every article block.
pub const SEPARATOR: &str = "--------------------------------------";

/// Printed when the response carries no articles.
pub const NO_ARTICLES: &str = "No articles found or invalid response";

/// Printed in place of an absent status or count.
const ABSENT: &str = "None";

fn or_absent<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}

/// Write a decoded search result.
pub fn write_result<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "API Response status: {}", or_absent(result.status.as_deref()))?;
    writeln!(out, "Total results: {}", or_absent(result.total_results))?;

    match result.found_articles() {
        Some(articles) => {
            writeln!(out, "\nFound {} articles:\n", articles.len())?;
            for article in articles {
                write_article(out, article)?;
            }
        }
        None => {
            writeln!(out, "{NO_ARTICLES}")?;
            if let Some(message) = &result.message {
                writeln!(out, "Error message: {message}")?;
            }
        }
    }
    Ok(())
}

fn write_article<W: Write>(out: &mut W, article: &Article) -> io::Result<()> {
    writeln!(out, "Title: {}", article.title_or_placeholder())?;
    writeln!(out, "Description: {}", article.description_or_placeholder())?;
    writeln!(out, "URL: {}", article.url_or_placeholder())?;
    writeln!(out, "{SEPARATOR}")
}

/// Write a query failure.
///
/// Only data owned by the error is referenced; a shape failure echoes the
/// raw body it carries.
pub fn write_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    match err {
        QueryError::Transport(e) => writeln!(out, "Request failed: {e}"),
        QueryError::Decode { source, .. } => {
            writeln!(out, "Failed to parse JSON response: {source}")
        }
        QueryError::Shape { source, body } => {
            writeln!(out, "Missing expected key in response: {source}")?;
            writeln!(out, "Full response: {body}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_DESCRIPTION;

    fn render(result: &SearchResult) -> String {
        let mut out = Vec::new();
        write_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn article(title: &str, description: Option<&str>, url: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_write_result_with_articles() {
        let result = SearchResult {
            status: Some("ok".to_string()),
            total_results: Some(2),
            articles: Some(vec![
                article("First", Some("One"), "https://a.example"),
                article("Second", Some("Two"), "https://b.example"),
            ]),
            ..Default::default()
        };

        let expected = "API Response status: ok\n\
                        Total results: 2\n\
                        \n\
                        Found 2 articles:\n\
                        \n\
                        Title: First\n\
                        Description: One\n\
                        URL: https://a.example\n\
                        --------------------------------------\n\
                        Title: Second\n\
                        Description: Two\n\
                        URL: https://b.example\n\
                        --------------------------------------\n";
        assert_eq!(render(&result), expected);
    }

    #[test]
    fn test_write_result_placeholder() {
        let result = SearchResult {
            articles: Some(vec![article("Only", None, "https://a.example")]),
            ..Default::default()
        };
        let text = render(&result);

        assert!(text.contains(&format!("Description: {NO_DESCRIPTION}\n")));
        assert!(text.contains("API Response status: None\n"));
        assert!(text.contains("Total results: None\n"));
    }

    #[test]
    fn test_write_result_no_articles_with_message() {
        let result = SearchResult {
            status: Some("error".to_string()),
            message: Some("Invalid apiKey".to_string()),
            ..Default::default()
        };
        let text = render(&result);

        assert!(text.ends_with(&format!("{NO_ARTICLES}\nError message: Invalid apiKey\n")));
        assert!(!text.contains(SEPARATOR));
    }

    #[test]
    fn test_write_error_shape_echoes_body() {
        let source = serde_json::from_str::<SearchResult>("[]").unwrap_err();
        let err = QueryError::Shape {
            source,
            body: "[]".to_string(),
        };
        let mut out = Vec::new();
        write_error(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Missing expected key in response: "));
        assert!(text.ends_with("Full response: []\n"));
    }

    #[test]
    fn test_write_error_decode() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = QueryError::Decode {
            source,
            body: "nope".to_string(),
        };
        let mut out = Vec::new();
        write_error(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Failed to parse JSON response: "));
        assert!(!text.contains("Full response"));
    }
}
