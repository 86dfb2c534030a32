//! Glossary category model
//!
//! Entries are classified by morphological role. The data file stores the
//! category as free text; this enum names the three tabs the browser offers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Morphological role of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A root word carrying the core meaning (e.g. "bio-")
    Root,
    /// A prefix attached before a root (e.g. "anti-")
    Prefix,
    /// A suffix attached after a root (e.g. "-ology")
    Suffix,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 3] = [Category::Root, Category::Prefix, Category::Suffix];

    /// The literal label used in data files and on tabs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
        }
    }

    /// Plural label used on tabs
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Root => "Roots",
            Self::Prefix => "Prefixes",
            Self::Suffix => "Suffixes",
        }
    }

    /// Parse a category from user input (case-insensitive, plurals accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "root" | "roots" => Some(Self::Root),
            "prefix" | "prefixes" => Some(Self::Prefix),
            "suffix" | "suffixes" => Some(Self::Suffix),
            _ => None,
        }
    }

    /// Whether a raw category string from the dataset names this category
    pub fn matches(&self, raw: &str) -> bool {
        raw.to_lowercase() == self.label().to_lowercase()
    }

    /// The next tab, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Root => Self::Prefix,
            Self::Prefix => Self::Suffix,
            Self::Suffix => Self::Root,
        }
    }

    /// The previous tab, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Root => Self::Suffix,
            Self::Prefix => Self::Root,
            Self::Suffix => Self::Prefix,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown category '{}' (expected one of: root, prefix, suffix)",
                s
            )
        })
    }
}
