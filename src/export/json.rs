//! JSON export of entries

use std::io::Write;

use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Entry;

/// Write entries as a pretty-printed JSON array
pub fn export_entries_json<W: Write>(entries: &[&Entry], writer: &mut W) -> GlossaryResult<()> {
    serde_json::to_writer_pretty(&mut *writer, entries)
        .map_err(|e| GlossaryError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GlossaryError::Export(e.to_string()))?;
    Ok(())
}
