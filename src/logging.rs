//! Logging setup
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs to
//! a file instead, and not at all if that file cannot be opened. The filter
//! comes from `GLOSSARY_LOG` and defaults to `warn`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{GlossaryError, GlossaryResult};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "GLOSSARY_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Append logs to `path`, creating parent directories as needed
pub fn init_file(path: &Path) -> GlossaryResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| GlossaryError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_file_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_file(&blocker.join("glossary.log")).unwrap_err();
        assert!(matches!(err, GlossaryError::Io(_)));
    }
}
