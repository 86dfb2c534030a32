//! Search and filtering over the glossary
//!
//! - `normalize`: hyphen-insensitive term and query cleaning
//! - `filter`: category and free-text filtering

pub mod filter;
pub mod normalize;

pub use filter::{filter_by_category, filter_by_query, Filter};
pub use normalize::{clean_query, clean_term};
