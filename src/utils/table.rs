use anyhow::{bail, Result};
use std::path::Path;

/// Verify a header row carries every required column before any query runs.
/// A missing column is fatal and names the first offender.
pub fn ensure_columns(
    headers: &csv::StringRecord,
    required: &[&str],
    source: &Path,
) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h.trim() == *column) {
            bail!(
                "{} is missing required column '{}'",
                source.display(),
                column
            );
        }
    }
    Ok(())
}

/// Index of a named column in a header row.
pub fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}
