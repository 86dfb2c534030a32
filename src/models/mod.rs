//! Core data models for the glossary browser

pub mod category;
pub mod entry;

pub use category::Category;
pub use entry::{Entry, EntryValidationError};
