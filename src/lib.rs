//! Glossary browser - search and browse word roots, prefixes and suffixes
//!
//! This library provides the core of the glossary browser: an immutable,
//! sorted entry store and a filter engine that matches free-text queries
//! against terms, meanings and usage examples, expanding the result with
//! every morpheme contained in the query.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Entries and categories
//! - `storage`: Loading the dataset into an [`storage::EntryStore`]
//! - `search`: Term normalization and the filter engine
//! - `browser`: The browsing session and its capability traits
//! - `display`, `export`: Text and structured output
//! - `cli`, `tui`: Front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use glossary::search::filter_by_query;
//! use glossary::storage::EntryStore;
//!
//! let store = EntryStore::load("glossary.json")?;
//! let hits = filter_by_query(store.entries(), "biology");
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod search;
pub mod storage;
pub mod tui;

pub use error::GlossaryError;
