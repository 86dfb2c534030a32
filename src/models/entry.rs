//! Glossary entry model
//!
//! A single vocabulary record as it appears in the dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::normalize::clean_term;

/// One glossary record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Headword, possibly carrying affix hyphens ("-ology", "bio-")
    pub term: String,

    /// Category label; expected to be Root, Prefix or Suffix but not enforced
    pub category: String,

    /// Language or source of derivation
    #[serde(default)]
    pub origin: String,

    /// What the term means
    #[serde(default)]
    pub meaning: String,

    /// Words that use the term
    #[serde(default)]
    pub usage_examples: Vec<String>,
}

impl Entry {
    /// Create a new entry with no origin, meaning or examples
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
            origin: String::new(),
            meaning: String::new(),
            usage_examples: Vec::new(),
        }
    }

    /// Set the origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the meaning
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    /// Set the usage examples
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usage_examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// The term without affix hyphens, lowercased
    pub fn normalized_term(&self) -> String {
        clean_term(&self.term).to_lowercase()
    }

    /// Usage examples joined for display
    pub fn examples_joined(&self) -> String {
        self.usage_examples.join(", ")
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.term.trim().is_empty() {
            return Err(EntryValidationError::EmptyTerm);
        }

        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.category)
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyTerm,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTerm => write!(f, "Entry term cannot be empty"),
        }
    }
}

impl std::error::Error for EntryValidationError {}
