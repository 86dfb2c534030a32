//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the browser and store.

pub mod browse;
pub mod entries;
pub mod setup;

pub use browse::{parse_line, run_line_session, run_session, LineInput};
pub use entries::{
    handle_contact, handle_list, handle_open, handle_search, handle_show, render_entries,
    OutputFormat,
};
pub use setup::{handle_config, handle_init};
