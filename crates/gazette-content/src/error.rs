//! Error types for the `gazette-content` crate.
//!
//! Loading is deliberately lenient: malformed lines are dropped (with a
//! warning) rather than reported as errors, and a missing resource file
//! loads as empty content. The only hard failure is an I/O error other
//! than "file not found".

use std::path::PathBuf;

/// Errors that can occur while reading resource files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A resource file exists but could not be read.
    #[error("failed to read resource file {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
