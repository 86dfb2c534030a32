//! Storage layer for the glossary browser
//!
//! The glossary is a read-only dataset: it is loaded once into an
//! [`EntryStore`] and never written back. The only write is the first-run
//! starter file.

pub mod file_io;
pub mod init;
pub mod store;

pub use file_io::DataFormat;
pub use store::{locale_cmp, sort_entries, EntryStore};
