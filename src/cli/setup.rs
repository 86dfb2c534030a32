//! Setup CLI commands
//!
//! `init` writes the starter glossary; `config` shows where things live.

use std::path::Path;

use crate::config::{GlossaryPaths, Settings};
use crate::error::GlossaryResult;
use crate::storage::init::initialize_dataset;

/// Handle `init`
pub fn handle_init(data_file: &Path, force: bool) -> GlossaryResult<()> {
    if initialize_dataset(data_file, force)? {
        println!("Wrote starter glossary to {}", data_file.display());
        println!();
        println!("Run 'glossary list' to see the entries.");
    } else {
        println!(
            "{} already exists; use --force to overwrite it.",
            data_file.display()
        );
    }
    Ok(())
}

/// Configuration summary shown by `config`
pub fn format_config(paths: &GlossaryPaths, settings: &Settings, data_file: &Path) -> String {
    let mut output = String::new();
    output.push_str("Glossary Configuration\n");
    output.push_str("======================\n");
    output.push_str(&format!("Base directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("Data file:      {}\n", data_file.display()));
    output.push_str(&format!("Log file:       {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Search URL:        {}\n", settings.search_url_base));
    output.push_str(&format!(
        "  Search with origin: {}\n",
        settings.search_includes_origin
    ));
    output.push_str(&format!("  Contact email:     {}\n", settings.contact_email));
    output.push_str(&format!(
        "  Confirmation:      {}s\n",
        settings.confirmation_secs
    ));
    output
}

/// Handle `config`; `init` writes the current settings to disk first
pub fn handle_config(
    paths: &GlossaryPaths,
    settings: &Settings,
    data_file: &Path,
    init: bool,
) -> GlossaryResult<()> {
    if init {
        settings.save(paths)?;
        println!("Wrote {}", paths.settings_file().display());
        println!();
    }
    print!("{}", format_config(paths, settings, data_file));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_config_lists_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let data_file = paths.default_data_file();

        let text = format_config(&paths, &settings, &data_file);
        assert!(text.contains(&data_file.display().to_string()));
        assert!(text.contains(&settings.contact_email));
        assert!(text.contains("Confirmation:      2s"));
    }

    #[test]
    fn test_config_init_writes_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlossaryPaths::with_base_dir(temp_dir.path().join("nested"));
        let settings = Settings::default();

        handle_config(&paths, &settings, &paths.default_data_file(), true).unwrap();
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("glossary.json");
        std::fs::write(&path, "[]").unwrap();

        handle_init(&path, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

        handle_init(&path, true).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
