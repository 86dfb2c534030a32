//! Entry display formatting
//!
//! Formats glossary entries for terminal output as blocks, tables and detail
//! views.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Entry;

/// Shown whenever a filter leaves nothing visible
pub const NO_ENTRIES: &str = "No entries found.";

/// Format one entry as a display block
pub fn format_entry_block(entry: &Entry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", entry.term));
    output.push_str(&format!("  Category:       {}\n", entry.category));
    output.push_str(&format!("  Origin:         {}\n", entry.origin));
    output.push_str(&format!("  Meaning:        {}\n", entry.meaning));
    output.push_str(&format!("  Usage Examples: {}\n", entry.examples_joined()));
    output
}

/// Format entries as consecutive blocks separated by blank lines
pub fn format_entry_blocks(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    entries
        .iter()
        .map(|entry| format_entry_block(entry))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Tabled)]
struct EntryRow<'a> {
    #[tabled(rename = "Term")]
    term: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Origin")]
    origin: &'a str,
    #[tabled(rename = "Meaning")]
    meaning: &'a str,
}

/// Format entries as a compact table
pub fn format_entry_table(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    let rows = entries.iter().map(|entry| EntryRow {
        term: &entry.term,
        category: &entry.category,
        origin: &entry.origin,
        meaning: &entry.meaning,
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n{} entries\n", table, entries.len())
}

/// Format a single entry with its web search link
pub fn format_entry_details(entry: &Entry, search_url: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Term: {}\n", entry.term));
    output.push_str(&format!("  Category: {}\n", entry.category));
    if !entry.origin.is_empty() {
        output.push_str(&format!("  Origin:   {}\n", entry.origin));
    }
    output.push_str(&format!("  Meaning:  {}\n", entry.meaning));

    if !entry.usage_examples.is_empty() {
        output.push_str("\n  Usage examples:\n");
        for example in &entry.usage_examples {
            output.push_str(&format!("    - {}\n", example));
        }
    }

    output.push('\n');
    output.push_str(&format!("  Search: {}\n", search_url));

    output
}
