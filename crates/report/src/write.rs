//! Writing reports to disk.

use std::{fs, path::Path};

use serde::Serialize;

use crate::{ReportError, Table};

/// Writes the rendered `table` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be written.
pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<(), ReportError> {
    write_text(path.as_ref(), &table.to_string())
}

/// Writes `value` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails, or
/// [`ReportError::Io`] if the file cannot be written.
pub fn write_json<T>(path: impl AsRef<Path>, value: &T) -> Result<(), ReportError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    write_text(path.as_ref(), &json)
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
