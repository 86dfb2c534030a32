//! Entry store
//!
//! Holds the glossary snapshot for the whole session. It is created once from
//! the data source, sorted by term, and only ever read afterwards.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use deunicode::deunicode;
use tracing::{debug, error, info};

use super::file_io::read_data_required;
use crate::error::{GlossaryError, GlossaryResult};
use crate::models::{Category, Entry};
use crate::search::clean_query;

/// Immutable, term-sorted collection of glossary entries
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    source: Option<PathBuf>,
}

impl EntryStore {
    /// Read the data source once and build the store
    ///
    /// Failures are logged before being returned; the caller decides whether
    /// to show an empty browser.
    pub fn load(path: impl AsRef<Path>) -> GlossaryResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading glossary");

        let result = read_data_required::<Vec<Entry>, _>(path).and_then(Self::from_entries);
        match result {
            Ok(mut store) => {
                info!(path = %path.display(), entries = store.len(), "glossary loaded");
                store.source = Some(path.to_path_buf());
                Ok(store)
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "error loading glossary");
                Err(err)
            }
        }
    }

    /// Build a store from in-memory entries, validating and sorting them
    pub fn from_entries(mut entries: Vec<Entry>) -> GlossaryResult<Self> {
        for (index, entry) in entries.iter().enumerate() {
            entry.validate().map_err(|e| {
                GlossaryError::Validation(format!("entry {}: {}", index + 1, e))
            })?;
        }

        sort_entries(&mut entries);

        Ok(Self {
            entries,
            source: None,
        })
    }

    /// All entries in term order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The file this store was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Look up a single entry by term
    ///
    /// An exact (case-insensitive) match on the raw term wins; otherwise the
    /// affix hyphens are ignored, so "ology" finds "-ology".
    pub fn find_term(&self, term: &str) -> Option<&Entry> {
        let term = term.trim();
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.term.to_lowercase() == term.to_lowercase())
        {
            return Some(entry);
        }

        let wanted = clean_query(term);
        if wanted.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.normalized_term() == wanted)
    }

    /// Entry counts per known category, in tab order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| {
                let count = self
                    .entries
                    .iter()
                    .filter(|e| category.matches(&e.category))
                    .count();
                (*category, count)
            })
            .collect()
    }
}

/// Sort entries by term using [`locale_cmp`]; the sort is stable
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| locale_cmp(&a.term, &b.term));
}

/// Collation-style string comparison
///
/// The primary key is the text transliterated to ASCII and case-folded, so
/// accented letters sort beside their base letters ("école" next to "ego").
/// Ties fall back to the case-folded original, then lowercase before
/// uppercase, then code points so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| {
            let folded_a = a.chars().flat_map(char::to_lowercase);
            let folded_b = b.chars().flat_map(char::to_lowercase);
            folded_a.cmp(folded_b)
        })
        .then_with(|| {
            let case_a = a.chars().map(char::is_uppercase);
            let case_b = b.chars().map(char::is_uppercase);
            case_a.cmp(case_b)
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn unsorted_entries() -> Vec<Entry> {
        vec![
            Entry::new("photo", "Root").with_meaning("light"),
            Entry::new("Bio", "Root").with_meaning("life"),
            Entry::new("-ology", "Suffix").with_meaning("study of"),
            Entry::new("anti-", "Prefix").with_meaning("against"),
            Entry::new("bio", "root").with_meaning("life, lowercase"),
            Entry::new("geo", "Infix").with_meaning("earth"),
        ]
    }

    fn terms(store: &EntryStore) -> Vec<&str> {
        store.entries().iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn test_from_entries_sorts_by_term() {
        let store = EntryStore::from_entries(unsorted_entries()).unwrap();
        assert_eq!(
            terms(&store),
            vec!["-ology", "anti-", "bio", "Bio", "geo", "photo"]
        );
        assert_eq!(store.len(), 6);
        assert!(store.source().is_none());
    }

    #[test]
    fn test_resorting_is_stable_and_idempotent() {
        let store = EntryStore::from_entries(unsorted_entries()).unwrap();
        let mut again = store.entries().to_vec();
        sort_entries(&mut again);
        assert_eq!(again, store.entries());
    }

    #[test]
    fn test_sort_keeps_equal_terms_in_input_order() {
        let entries = vec![
            Entry::new("cent", "Root").with_meaning("first"),
            Entry::new("cent", "Root").with_meaning("second"),
        ];
        let store = EntryStore::from_entries(entries).unwrap();
        assert_eq!(store.entries()[0].meaning, "first");
        assert_eq!(store.entries()[1].meaning, "second");
    }

    #[test]
    fn test_locale_cmp_is_case_insensitive_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(locale_cmp("bio", "Bio"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accented_terms_sort_beside_base_letters() {
        let store = EntryStore::from_entries(vec![
            Entry::new("zoo-", "Prefix"),
            Entry::new("ego", "Root"),
            Entry::new("école", "Root"),
            Entry::new("faux", "Root"),
        ])
        .unwrap();
        assert_eq!(terms(&store), vec!["école", "ego", "faux", "zoo-"]);
    }

    #[test]
    fn test_locale_cmp_accent_ties() {
        assert_eq!(locale_cmp("ecole", "école"), Ordering::Less);
        assert_eq!(locale_cmp("École", "ecole"), Ordering::Greater);
        assert_eq!(locale_cmp("Ångström", "zeta"), Ordering::Less);
    }

    #[test]
    fn test_empty_term_is_rejected() {
        let err = EntryStore::from_entries(vec![
            Entry::new("bio", "Root"),
            Entry::new("", "Root"),
        ])
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("entry 2"));
    }

    #[test]
    fn test_load_rejects_file_with_empty_term() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glossary.json");
        fs::write(&path, r#"[{"term": "  ", "category": "Root"}]"#).unwrap();

        let err = EntryStore::load(&path).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let store = EntryStore::from_entries(unsorted_entries()).unwrap();
        assert!(store.entries().iter().any(|e| e.category == "Infix"));
    }

    #[test]
    fn test_find_term() {
        let store = EntryStore::from_entries(unsorted_entries()).unwrap();
        assert_eq!(store.find_term("-ology").unwrap().term, "-ology");
        assert_eq!(store.find_term("ology").unwrap().term, "-ology");
        assert_eq!(store.find_term("ANTI").unwrap().term, "anti-");
        assert_eq!(store.find_term("Bio").unwrap().term, "bio");
        assert!(store.find_term("xylo").is_none());
        assert!(store.find_term("--").is_none());
    }

    #[test]
    fn test_category_counts() {
        let store = EntryStore::from_entries(unsorted_entries()).unwrap();
        assert_eq!(
            store.category_counts(),
            vec![
                (Category::Root, 3),
                (Category::Prefix, 1),
                (Category::Suffix, 1)
            ]
        );
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glossary.json");
        fs::write(
            &path,
            r#"[
                {"term": "tele-", "category": "Prefix", "origin": "Greek", "meaning": "far", "usage_examples": ["telephone"]},
                {"term": "-cide", "category": "Suffix", "origin": "Latin", "meaning": "killing", "usage_examples": []}
            ]"#,
        )
        .unwrap();

        let store = EntryStore::load(&path).unwrap();
        assert_eq!(terms(&store), vec!["-cide", "tele-"]);
        assert_eq!(store.source(), Some(path.as_path()));
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glossary.yml");
        fs::write(
            &path,
            "- term: geo\n  category: Root\n  origin: Greek\n  meaning: earth\n  usage_examples: [geology]\n",
        )
        .unwrap();

        let store = EntryStore::load(&path).unwrap();
        assert_eq!(terms(&store), vec!["geo"]);
    }

    #[test]
    fn test_load_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, r#"{"term": "not an array"}"#).unwrap();

        assert!(EntryStore::load(&path).unwrap_err().is_load());
        assert!(EntryStore::load(temp_dir.path().join("missing.json"))
            .unwrap_err()
            .is_load());
    }
}
