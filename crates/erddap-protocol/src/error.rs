//! Query construction error types.

use thiserror::Error;

/// Result type alias using QueryError.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that abort the current selection or query-build step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Protocol tag other than `tabledap` or `griddap`.
    #[error("Unknown protocol '{0}', expected 'tabledap' or 'griddap'")]
    UnknownProtocol(String),

    /// An index or name does not resolve to a known variable or dimension.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::UnknownProtocol("wms".to_string());
        assert!(err.to_string().contains("'wms'"));

        let err = QueryError::InvalidSelection("index 7 out of range".to_string());
        assert_eq!(err.to_string(), "Invalid selection: index 7 out of range");
    }
}
