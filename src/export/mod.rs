//! Export module
//!
//! Writes filtered entries in machine-readable formats:
//! - CSV: spreadsheet-compatible, usage examples joined with "; "
//! - JSON: the same shape as the dataset, so output can be loaded again
//! - YAML: human-readable, also loadable as a dataset

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_entries_csv;
pub use json::export_entries_json;
pub use yaml::export_entries_yaml;
