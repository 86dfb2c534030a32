//! Custom error types for the glossary browser
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for glossary operations
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The glossary data source could not be read or parsed
    #[error("Failed to load glossary: {0}")]
    Load(String),

    /// Validation errors for entries
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Launching an external browser failed
    #[error("Failed to open {url}: {reason}")]
    Launch { url: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

}

impl GlossaryError {
    /// Create a "not found" error for glossary terms
    pub fn term_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Term",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GlossaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for GlossaryError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for glossary operations
pub type GlossaryResult<T> = Result<T, GlossaryError>;
