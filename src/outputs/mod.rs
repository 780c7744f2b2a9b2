//! Output generation for search results.
//!
//! # Submodules
//!
//! - [`console`]: Writes results and failures as plain text lines
//!
//! Rendering targets any [`std::io::Write`], so the binary passes stdout and
//! tests pass a byte buffer.

pub mod console;
