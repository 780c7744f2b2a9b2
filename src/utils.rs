//! Helpers for console input and log formatting.

use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// The interactive prompt shown when no keyword is given on the command line.
pub const KEYWORD_PROMPT: &str = "What type of news are you interested in? ";

/// Prompt for a search keyword and read one line.
///
/// The trailing line terminator is removed; everything else, including an
/// empty line, is returned as typed.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the line fails.
#[instrument(level = "debug", skip_all)]
pub fn prompt_keyword<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    output.write_all(KEYWORD_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    debug!(bytes = read, "Read keyword from prompt");
    Ok(line)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, on a character boundary, with
/// an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
