//! Filter engine
//!
//! Computes the visible subset of the glossary for a free-text query or a
//! category tab. Every function here is total and returns entries in store
//! order.
//!
//! ## Query matching
//!
//! 1. A blank query (or one that is only hyphens) matches everything.
//! 2. Direct pass: an entry matches when its cleaned term, its meaning or any
//!    usage example contains the cleaned query.
//! 3. Expansion pass: any entry whose cleaned term is embedded in the cleaned
//!    query also matches, so "biology" surfaces both "bio-" and "-ology".
//! 4. The result is every entry whose cleaned term was matched by either pass.

use std::collections::HashSet;

use super::normalize::clean_query;
use crate::models::{Category, Entry};

/// Entries whose category equals `category`, ignoring case
///
/// Unknown categories simply match nothing.
pub fn filter_by_category<'a>(entries: &'a [Entry], category: &str) -> Vec<&'a Entry> {
    let wanted = category.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.category.to_lowercase() == wanted)
        .collect()
}

/// Entries matching a free-text query
pub fn filter_by_query<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = clean_query(query);
    if needle.is_empty() {
        return entries.iter().collect();
    }

    let terms: Vec<String> = entries.iter().map(Entry::normalized_term).collect();

    let mut matched: HashSet<&str> = entries
        .iter()
        .zip(&terms)
        .filter(|(entry, term)| is_direct_match(entry, term, &needle))
        .map(|(_, term)| term.as_str())
        .collect();

    for term in &terms {
        if needle.contains(term.as_str()) {
            matched.insert(term.as_str());
        }
    }

    entries
        .iter()
        .zip(&terms)
        .filter(|(_, term)| matched.contains(term.as_str()))
        .map(|(entry, _)| entry)
        .collect()
}

fn is_direct_match(entry: &Entry, normalized_term: &str, needle: &str) -> bool {
    normalized_term.contains(needle)
        || entry.meaning.to_lowercase().contains(needle)
        || entry
            .usage_examples
            .iter()
            .any(|example| example.to_lowercase().contains(needle))
}

/// What the browser is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// The whole store
    #[default]
    All,
    /// Free-text search
    Query(String),
    /// A single category tab
    Category(Category),
}

impl Filter {
    /// Apply this filter to the store's entries
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        match self {
            Self::All => entries.iter().collect(),
            Self::Query(query) => filter_by_query(entries, query),
            Self::Category(category) => filter_by_category(entries, category.label()),
        }
    }

    /// The active category tab, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Category(category) => Some(*category),
            _ => None,
        }
    }

    /// The active query text, or an empty string
    pub fn query(&self) -> &str {
        match self {
            Self::Query(query) => query,
            _ => "",
        }
    }
}
