//! TUI dialogs

pub mod help;
