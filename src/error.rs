//! Failure kinds for a single search query.
//!
//! Each variant is terminal for the run. Variants raised after the body was
//! read carry that body, so diagnostics never depend on how far decoding got.

use std::error::Error as StdError;
use thiserror::Error;

/// An error raised while querying the search service.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The request never produced a usable response: DNS, connection,
    /// transport timeout, or a non-2xx HTTP status.
    ///
    /// The request URL is stripped from the inner error because it embeds the
    /// credential. The message includes the whole cause chain, since reqwest's
    /// own message is only `error sending request` for connect, DNS, and
    /// timeout failures.
    #[error("{}", cause_chain(.0))]
    Transport(reqwest::Error),

    /// The response body is not valid JSON.
    #[error("{source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The response body is JSON but does not have the expected shape.
    #[error("{source}")]
    Shape {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl QueryError {
    /// The raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            QueryError::Transport(_) => None,
            QueryError::Decode { body, .. } | QueryError::Shape { body, .. } => Some(body),
        }
    }
}

/// Render an error followed by each of its causes, joined with `": "`.
///
/// A cause whose message repeats the previous one is skipped.
pub fn cause_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut last = rendered.clone();
    let mut cause = err.source();
    while let Some(e) = cause {
        let msg = e.to_string();
        if msg != last {
            rendered.push_str(": ");
            rendered.push_str(&msg);
            last = msg;
        }
        cause = e.source();
    }
    rendered
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Transport(e.without_url())
    }
}
