//! YAML export of entries

use std::io::Write;

use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Entry;

/// Write entries as a YAML sequence
pub fn export_entries_yaml<W: Write>(entries: &[&Entry], writer: &mut W) -> GlossaryResult<()> {
    serde_yaml::to_writer(writer, entries).map_err(|e| GlossaryError::Export(e.to_string()))
}
