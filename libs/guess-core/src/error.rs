//! Error types for guess-core.
//!
//! The engine itself never fails; errors only come from loading data.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a decklist.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid card count at line {line}: {value}")]
    InvalidCount { line: usize, value: String },

    #[error("missing card name at line {line}")]
    MissingName { line: usize },

    #[error("duplicate card {name} at line {line}")]
    DuplicateCard { name: String, line: usize },

    #[error("unknown card {name} at line {line}")]
    UnknownCard { name: String, line: usize },

    #[error("empty decklist")]
    EmptyDecklist,
}

/// Errors that can occur while loading card data snapshots.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateId(i64),

    #[error("unknown game mode {0}")]
    UnknownGameMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_count() {
        let error = ParseError::InvalidCount {
            line: 3,
            value: "three".to_string(),
        };
        assert_eq!(error.to_string(), "invalid card count at line 3: three");
    }

    #[test]
    fn test_error_display_unknown_card() {
        let error = ParseError::UnknownCard {
            name: "Not A Card".to_string(),
            line: 12,
        };
        assert_eq!(error.to_string(), "unknown card Not A Card at line 12");
    }

    #[test]
    fn test_error_display_duplicate_id() {
        assert_eq!(DataError::DuplicateId(7).to_string(), "duplicate card id 7");
    }
}
