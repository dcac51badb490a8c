//! Error types for the lingraph knowledge-graph core
//!
//! The query-composition layer itself has no recoverable run-time errors:
//! renderers are total and unrecognized tokens yield empty candidates.
//! Everything here is either a load-time data problem or a registry lookup
//! that callers are expected to treat as "not present".

use thiserror::Error;

/// Main error type for knowledge-graph operations
#[derive(Error, Debug)]
pub enum KgError {
    /// An entry type string that is not part of the compiled-in schema
    #[error("Unknown entry type: {0}")]
    UnknownType(String),

    /// Reverse lookup on a relation that has no reverse alias
    #[error("Relation '{0}' has no reverse alias")]
    NotReversible(String),

    /// Catalog lookup for a name absent from the loaded tables
    #[error("Unknown entry: {0}")]
    UnknownEntry(String),

    /// Entries/relations tables absent or malformed at load time
    #[error("Missing external data ({path}): {reason}")]
    MissingExternalData { path: String, reason: String },

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl KgError {
    /// Build a `MissingExternalData` error for a table path
    pub fn missing_data(path: impl Into<String>, reason: impl Into<String>) -> Self {
        KgError::MissingExternalData {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for knowledge-graph operations
pub type Result<T> = std::result::Result<T, KgError>;

impl From<String> for KgError {
    fn from(s: String) -> Self {
        KgError::Other(s)
    }
}

impl From<&str> for KgError {
    fn from(s: &str) -> Self {
        KgError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = KgError::UnknownType("gadget".to_string());
        assert_eq!(error.to_string(), "Unknown entry type: gadget");

        let error = KgError::NotReversible("related_topic".to_string());
        assert!(error.to_string().contains("no reverse alias"));

        let error = KgError::missing_data("./result/entries.tsv", "No such file");
        assert!(error.to_string().contains("entries.tsv"));
        assert!(error.to_string().contains("No such file"));
    }

    #[test]
    fn test_error_conversion() {
        let error: KgError = "test error".into();
        assert!(matches!(error, KgError::Other(_)));

        let error: KgError = "test error".to_string().into();
        assert!(matches!(error, KgError::Other(_)));
    }
}
