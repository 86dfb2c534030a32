//! Storage initialization
//!
//! Handles first-run setup: writes the bundled starter glossary so the
//! browser has something to show.

use std::path::Path;

use tracing::info;

use super::file_io::write_data_atomic;
use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Entry;

const STARTER_GLOSSARY: &str = include_str!("../../data/glossary.json");

/// The bundled starter entries
pub fn starter_entries() -> GlossaryResult<Vec<Entry>> {
    serde_json::from_str(STARTER_GLOSSARY)
        .map_err(|e| GlossaryError::Load(format!("bundled glossary is invalid: {}", e)))
}

/// Write the starter glossary to `path`
///
/// The file is YAML when `path` ends in `.yaml` or `.yml`, JSON otherwise.
/// Returns `false` without touching anything if the file already exists and
/// `force` is not set.
pub fn initialize_dataset(path: &Path, force: bool) -> GlossaryResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let entries = starter_entries()?;
    write_data_atomic(path, &entries)?;
    info!(path = %path.display(), entries = entries.len(), "wrote starter glossary");

    Ok(true)
}
