//! Dataset file I/O
//!
//! Reads and writes the glossary as JSON or YAML, picked by file extension.
//! Writes are atomic so a starter dataset is either fully written or not at
//! all.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::GlossaryError;

/// Supported dataset encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a structured data file, returning a load error if it is missing or malformed
pub fn read_data_required<T, P>(path: P) -> Result<T, GlossaryError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(GlossaryError::Load(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| GlossaryError::Load(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match DataFormat::from_path(path) {
        DataFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            GlossaryError::Load(format!("Failed to parse {}: {}", path.display(), e))
        }),
        DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            GlossaryError::Load(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a structured data file atomically (write to temp, then rename)
pub fn write_data_atomic<T, P>(path: P, data: &T) -> Result<(), GlossaryError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GlossaryError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| GlossaryError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    match DataFormat::from_path(path) {
        DataFormat::Json => serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| GlossaryError::Io(format!("Failed to serialize data: {}", e)))?,
        DataFormat::Yaml => serde_yaml::to_writer(&mut writer, data)
            .map_err(|e| GlossaryError::Io(format!("Failed to serialize data: {}", e)))?,
    }

    writer
        .flush()
        .map_err(|e| GlossaryError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| GlossaryError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GlossaryError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
