//! Display formatting for terminal output
//!
//! Provides text formatting for entries and the plain-text renderer used by
//! the line-mode session.

pub mod entry;
pub mod renderer;

pub use entry::{
    format_entry_block, format_entry_blocks, format_entry_details, format_entry_table, NO_ENTRIES,
};
pub use renderer::TextRenderer;
