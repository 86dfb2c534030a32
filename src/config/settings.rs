//! User settings for the glossary browser
//!
//! Controls where the dataset lives, how web searches are built and what the
//! contact button copies.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::GlossaryPaths;
use crate::error::GlossaryError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Dataset location; falls back to `glossary.json` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Prefix the URL-encoded search text is appended to
    #[serde(default = "default_search_url_base")]
    pub search_url_base: String,

    /// Include the entry origin in web searches
    #[serde(default)]
    pub search_includes_origin: bool,

    /// Address copied by the contact action
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// How long the copy confirmation stays visible
    #[serde(default = "default_confirmation_secs")]
    pub confirmation_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_search_url_base() -> String {
    "https://www.google.com/search?q=".to_string()
}

fn default_contact_email() -> String {
    "hana@kaloudis.net".to_string()
}

fn default_confirmation_secs() -> u64 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            search_url_base: default_search_url_base(),
            search_includes_origin: false,
            contact_email: default_contact_email(),
            confirmation_secs: default_confirmation_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &GlossaryPaths) -> Result<Self, GlossaryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                GlossaryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GlossaryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GlossaryPaths) -> Result<(), GlossaryError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            GlossaryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GlossaryError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the dataset path: explicit override, then settings, then default
    pub fn resolve_data_file(&self, paths: &GlossaryPaths, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.default_data_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.search_url_base, "https://www.google.com/search?q=");
        assert!(!settings.search_includes_origin);
        assert_eq!(settings.confirmation_secs, 2);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.search_includes_origin = true;
        settings.contact_email = "someone@example.com".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.search_includes_origin);
        assert_eq!(loaded.contact_email, "someone@example.com");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"confirmation_secs": 5}"#).unwrap();
        assert_eq!(settings.confirmation_secs, 5);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.contact_email, "hana@kaloudis.net");
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_data_file(&paths, None), paths.default_data_file());

        settings.data_file = Some(PathBuf::from("from-settings.json"));
        assert_eq!(
            settings.resolve_data_file(&paths, None),
            PathBuf::from("from-settings.json")
        );
        assert_eq!(
            settings.resolve_data_file(&paths, Some(PathBuf::from("cli.yaml"))),
            PathBuf::from("cli.yaml")
        );
    }
}
