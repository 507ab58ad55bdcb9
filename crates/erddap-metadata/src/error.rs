//! Error types for dataset info parsing.

use thiserror::Error;

/// Result type for metadata parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while reading a dataset info feed.
///
/// Only schema-level problems are errors. A malformed value inside an
/// otherwise well-formed row degrades to an empty field instead.
#[derive(Error, Debug)]
pub enum ParseError {
    /// One or more required columns are absent from the header
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The feed could not be read as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = ParseError::MissingColumns(vec!["row_type".to_string(), "value".to_string()]);
        assert_eq!(err.to_string(), "Missing required columns: row_type, value");
    }
}
