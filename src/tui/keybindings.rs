//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for the browser, grouped by context. The
//! help dialog is generated from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Category tabs
    Tabs,
    /// Entry list navigation
    List,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Tabs => "Category Tabs",
            Self::List => "Entry List",
            Self::Dialog => "Dialogs",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('y'),
        modifiers: KeyModifiers::CONTROL,
        description: "Copy contact email",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Clear search / show all / quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    // Tabs
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next category tab",
        context: KeyContext::Tabs,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous category tab",
        context: KeyContext::Tabs,
    },
    Keybinding {
        key: KeyCode::F(2),
        modifiers: KeyModifiers::NONE,
        description: "Roots",
        context: KeyContext::Tabs,
    },
    Keybinding {
        key: KeyCode::F(3),
        modifiers: KeyModifiers::NONE,
        description: "Prefixes",
        context: KeyContext::Tabs,
    },
    Keybinding {
        key: KeyCode::F(4),
        modifiers: KeyModifiers::NONE,
        description: "Suffixes",
        context: KeyContext::Tabs,
    },
    Keybinding {
        key: KeyCode::Char('a'),
        modifiers: KeyModifiers::CONTROL,
        description: "All entries",
        context: KeyContext::Tabs,
    },
    // List
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Move up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Move down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::PageUp,
        modifiers: KeyModifiers::NONE,
        description: "Page up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::PageDown,
        modifiers: KeyModifiers::NONE,
        description: "Page down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Search the web for entry",
        context: KeyContext::List,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) && !matches!(kb.key, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let copy = KEYBINDINGS
            .iter()
            .find(|kb| kb.description == "Copy contact email")
            .unwrap();
        assert_eq!(format_keybinding(copy), "Ctrl+Y");

        let back = KEYBINDINGS
            .iter()
            .find(|kb| kb.key == KeyCode::BackTab)
            .unwrap();
        assert_eq!(format_keybinding(back), "Shift+Tab");
    }

    #[test]
    fn test_every_context_has_bindings() {
        for context in [
            KeyContext::Global,
            KeyContext::Tabs,
            KeyContext::List,
            KeyContext::Dialog,
        ] {
            assert!(!get_keybindings(context).is_empty(), "{:?}", context);
        }
    }
}
