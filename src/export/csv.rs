//! CSV export of entries

use std::io::Write;

use crate::error::GlossaryResult;
use crate::models::Entry;

/// Write entries as CSV with a header row
pub fn export_entries_csv<W: Write>(entries: &[&Entry], writer: &mut W) -> GlossaryResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Term", "Category", "Origin", "Meaning", "Usage Examples"])?;

    for entry in entries {
        let examples = entry.usage_examples.join("; ");
        csv_writer.write_record([
            entry.term.as_str(),
            entry.category.as_str(),
            entry.origin.as_str(),
            entry.meaning.as_str(),
            examples.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| crate::error::GlossaryError::Export(e.to_string()))?;

    Ok(())
}
