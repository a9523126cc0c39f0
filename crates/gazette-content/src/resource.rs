//! The shared line-oriented resource text format.
//!
//! Every external resource the generator consumes -- headline templates,
//! item category lists, location names -- uses the same format: UTF-8 text,
//! one entry per line. A line is skipped if it is blank or whitespace-only,
//! or if its very first character is `#` (no leading whitespace is trimmed
//! before the comment check). Surviving lines are trimmed and used
//! verbatim.
//!
//! Numeric lists additionally require each surviving line to parse as a
//! non-negative integer; lines that do not are dropped with a warning.

use std::path::Path;

use tracing::warn;

use crate::error::ContentError;

/// Split raw resource text into its entries.
///
/// Blank and whitespace-only lines are skipped; lines whose first character
/// is `#` are skipped; everything else is trimmed and kept in order.
pub fn entries(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim().to_owned())
        .collect()
}

/// Split raw resource text into non-negative integer entries.
///
/// Applies the same line filtering as [`entries`], then parses each
/// surviving line as an `i32` and drops lines that fail to parse or are
/// negative.
pub fn numeric_entries(raw: &str) -> Vec<i32> {
    entries(raw)
        .iter()
        .filter_map(|line| match line.parse::<i32>() {
            Ok(value) if value >= 0 => Some(value),
            Ok(value) => {
                warn!(line = %line, value, "dropping negative numeric resource entry");
                None
            }
            Err(_) => {
                warn!(line = %line, "dropping unparseable numeric resource entry");
                None
            }
        })
        .collect()
}

/// Read a resource file's raw text.
///
/// A missing file is not an error: it loads as empty content (with a
/// warning), matching the "recoverable by fallback" loading policy.
///
/// # Errors
///
/// Returns [`ContentError::Io`] for any I/O failure other than the file
/// not existing.
pub fn read_optional(path: &Path) -> Result<String, ContentError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(raw),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "resource file missing, loading as empty");
            Ok(String::new())
        }
        Err(source) => Err(ContentError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
