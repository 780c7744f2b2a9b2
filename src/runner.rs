//! The query runner: one keyword in, one rendered report out.

use crate::api::SearchAsync;
use crate::outputs::console;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Search for `keyword` and write the results, or the failure, to `out`.
///
/// Every query outcome is terminal and reported on `out`; only a failure to
/// write the report is returned as an error.
#[instrument(level = "info", skip(client, out))]
pub async fn run_query<S, W>(client: &S, keyword: &str, out: &mut W) -> io::Result<()>
where
    S: SearchAsync,
    W: Write,
{
    let t0 = Instant::now();
    match client.search(keyword).await {
        Ok(outcome) => {
            console::write_result(out, &outcome.result)?;
            info!(
                articles = outcome.result.found_articles().map_or(0, <[_]>::len),
                bytes = outcome.body.len(),
                elapsed_ms = t0.elapsed().as_millis(),
                "Printed search results"
            );
        }
        Err(e) => {
            error!(
                error = %e,
                body_received = e.body().is_some(),
                elapsed_ms = t0.elapsed().as_millis(),
                "Search failed"
            );
            console::write_error(out, &e)?;
        }
    }
    out.flush()
}
