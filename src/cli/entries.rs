//! Entry CLI commands
//!
//! One-shot commands over a loaded store: list, search, show, open and
//! contact.

use clap::ValueEnum;

use crate::browser::{search_url, ClipboardSink, Launcher};
use crate::config::Settings;
use crate::display::{format_entry_blocks, format_entry_details, format_entry_table};
use crate::error::{GlossaryError, GlossaryResult};
use crate::export::{export_entries_csv, export_entries_json, export_entries_yaml};
use crate::models::{Category, Entry};
use crate::search::{filter_by_category, filter_by_query};
use crate::storage::EntryStore;

/// Output format for entry listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Entry blocks, as the interactive browser shows them
    #[default]
    Text,
    /// Compact table
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// CSV with a header row
    Csv,
}

/// Render a set of entries in the requested format
pub fn render_entries(entries: &[&Entry], format: OutputFormat) -> GlossaryResult<String> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Text => return Ok(format_entry_blocks(entries)),
        OutputFormat::Table => return Ok(format_entry_table(entries)),
        OutputFormat::Json => export_entries_json(entries, &mut buffer)?,
        OutputFormat::Yaml => export_entries_yaml(entries, &mut buffer)?,
        OutputFormat::Csv => export_entries_csv(entries, &mut buffer)?,
    }

    String::from_utf8(buffer).map_err(|e| GlossaryError::Export(e.to_string()))
}

/// Entries for `list`, optionally narrowed to a category
///
/// Known category names (including plurals) are mapped to their label; any
/// other text is compared against the raw category as-is.
pub fn list_entries<'a>(store: &'a EntryStore, category: Option<&str>) -> Vec<&'a Entry> {
    match category {
        None => store.entries().iter().collect(),
        Some(raw) => {
            let label = Category::parse(raw)
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| raw.to_string());
            filter_by_category(store.entries(), &label)
        }
    }
}

/// Handle `list`
pub fn handle_list(
    store: &EntryStore,
    category: Option<&str>,
    format: OutputFormat,
) -> GlossaryResult<()> {
    let entries = list_entries(store, category);
    print!("{}", render_entries(&entries, format)?);
    Ok(())
}

/// Handle `search`
pub fn handle_search(store: &EntryStore, query: &str, format: OutputFormat) -> GlossaryResult<()> {
    let entries = filter_by_query(store.entries(), query);
    print!("{}", render_entries(&entries, format)?);
    Ok(())
}

/// Look up a single entry by term
pub fn find_entry<'a>(store: &'a EntryStore, term: &str) -> GlossaryResult<&'a Entry> {
    store
        .find_term(term)
        .ok_or_else(|| GlossaryError::term_not_found(term))
}

/// Handle `show`
pub fn handle_show(store: &EntryStore, settings: &Settings, term: &str) -> GlossaryResult<()> {
    let entry = find_entry(store, term)?;
    print!("{}", format_entry_details(entry, &search_url(settings, entry)));
    Ok(())
}

/// Handle `open`: launch the web search, or just print its URL
pub fn handle_open<L: Launcher>(
    store: &EntryStore,
    settings: &Settings,
    term: &str,
    print_only: bool,
    launcher: &mut L,
) -> GlossaryResult<()> {
    let entry = find_entry(store, term)?;
    let url = search_url(settings, entry);

    if print_only {
        println!("{}", url);
    } else {
        launcher.open_url(&url)?;
        println!("Opened search for {}", entry.term);
    }

    Ok(())
}

/// Handle `contact`: copy the contact address to the clipboard
pub fn handle_contact<C: ClipboardSink>(settings: &Settings, clipboard: &mut C) -> GlossaryResult<()> {
    clipboard.copy_text(&settings.contact_email)?;
    println!("{}", crate::browser::CONTACT_COPIED_LABEL);
    println!("  {}", settings.contact_email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::session::tests::{sample_store, RecordingClipboard, RecordingLauncher};

    #[test]
    fn test_list_entries_by_category_name() {
        let store = sample_store();
        let roots: Vec<_> = list_entries(&store, Some("roots"))
            .iter()
            .map(|e| e.term.as_str())
            .collect();
        assert_eq!(roots, vec!["bio-"]);

        assert!(list_entries(&store, Some("Interfix")).is_empty());
        assert_eq!(list_entries(&store, None).len(), 3);
    }

    #[test]
    fn test_render_entries_formats() {
        let store = sample_store();
        let entries: Vec<&Entry> = store.entries().iter().collect();

        let json = render_entries(&entries, OutputFormat::Json).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 3);

        let csv = render_entries(&entries, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("Term,Category,Origin,Meaning,Usage Examples"));
        assert_eq!(csv.lines().count(), 4);

        let yaml = render_entries(&entries, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("term: pre-"));

        assert_eq!(
            render_entries(&[], OutputFormat::Text).unwrap(),
            "No entries found.\n"
        );
    }

    #[test]
    fn test_find_entry_not_found() {
        let store = sample_store();
        assert_eq!(find_entry(&store, "-OLOGY").unwrap().term, "-ology");

        let err = find_entry(&store, "xyz").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_open_prints_or_launches() {
        let store = sample_store();
        let settings = Settings::default();
        let mut launcher = RecordingLauncher::default();

        handle_open(&store, &settings, "pre", true, &mut launcher).unwrap();
        assert!(launcher.opened.is_empty());

        handle_open(&store, &settings, "pre", false, &mut launcher).unwrap();
        assert_eq!(
            launcher.opened,
            vec!["https://www.google.com/search?q=pre-%20Prefix".to_string()]
        );

        launcher.fail = true;
        assert!(handle_open(&store, &settings, "pre", false, &mut launcher).is_err());
    }

    #[test]
    fn test_contact_copies_email() {
        let settings = Settings::default();
        let mut clipboard = RecordingClipboard::default();
        handle_contact(&settings, &mut clipboard).unwrap();
        assert_eq!(clipboard.copied, vec![settings.contact_email.clone()]);

        clipboard.fail = true;
        assert!(handle_contact(&settings, &mut clipboard).is_err());
    }
}
