//! Error types for qtlview.

use thiserror::Error;

/// Result type for qtlview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which text field of a record an annotation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The article title.
    Title,
    /// The article abstract.
    Abstract,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Abstract => write!(f, "abstract"),
        }
    }
}

/// Error type for qtlview operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An annotation failed ingestion (empty word, missing category, ...).
    #[error("Invalid annotation in {field} at index {index}: {reason}")]
    InvalidAnnotation {
        /// Field whose trait list holds the annotation
        field: Field,
        /// Position in that list
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// The record JSON is structurally wrong.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The annotation source could not produce a record.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid annotation error.
    pub fn invalid_annotation(field: Field, index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidAnnotation {
            field,
            index,
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Error::Fetch(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
