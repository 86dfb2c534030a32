//! Configuration module for the glossary browser
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GlossaryPaths;
pub use settings::Settings;
