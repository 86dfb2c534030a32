//! Terminal User Interface module
//!
//! An interactive glossary browser built on ratatui: a search field, category
//! tabs, the filtered entry list and a detail pane.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
