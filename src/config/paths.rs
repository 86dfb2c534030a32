//! Path management for the glossary browser
//!
//! ## Path Resolution Order
//!
//! 1. `GLOSSARY_CLI_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME`, `~/.config`,
//!    `%APPDATA%`, ...) joined with `glossary-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::GlossaryError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "GLOSSARY_CLI_DIR";

/// Manages all paths used by the glossary browser
#[derive(Debug, Clone)]
pub struct GlossaryPaths {
    /// Base directory for config, data and logs
    base_dir: PathBuf,
}

impl GlossaryPaths {
    /// Create a new GlossaryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, GlossaryError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create GlossaryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the glossary dataset
    pub fn default_data_file(&self) -> PathBuf {
        self.base_dir.join("glossary.json")
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("glossary.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), GlossaryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GlossaryError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, GlossaryError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| GlossaryError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("glossary-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.default_data_file(),
            temp_dir.path().join("glossary.json")
        );
        assert_eq!(paths.log_file(), temp_dir.path().join("glossary.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(BASE_DIR_ENV, custom_path);
        let paths = GlossaryPaths::new().unwrap();
        env::remove_var(BASE_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
