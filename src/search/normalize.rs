//! Term and query normalization
//!
//! Glossary terms carry hyphens to mark affixes ("-ism", "pre-"). Free text
//! typed by a user does not, so both sides are compared with the end hyphens
//! removed.

/// Strip any leading and trailing run of hyphens, keeping internal ones
pub fn clean_term(term: &str) -> &str {
    term.trim_start_matches('-').trim_end_matches('-')
}

/// Normalize a search query: trim, lowercase, then strip end hyphens
pub fn clean_query(query: &str) -> String {
    clean_term(&query.trim().to_lowercase()).to_string()
}
