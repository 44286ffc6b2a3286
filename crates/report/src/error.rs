use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A row does not match the number of table columns.
    #[error("row has {found} cells but the table has {expected} columns")]
    RowLength { expected: usize, found: usize },

    /// Writing a report file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized to JSON.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn io_error_names_the_path_and_keeps_the_source() {
        let error = ReportError::Io {
            path: PathBuf::from("out/dichotomy.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert_eq!(error.to_string(), "failed to write out/dichotomy.txt");
        assert!(error.source().is_some());
    }

    #[test]
    fn row_length_message() {
        let error = ReportError::RowLength {
            expected: 3,
            found: 2,
        };

        assert_eq!(
            error.to_string(),
            "row has 2 cells but the table has 3 columns"
        );
    }
}
