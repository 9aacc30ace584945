//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the wizard's keys. It is consumed by:
//! - the wizard footer for the short key hint line
//! - `HelpDialog` for the full listing

use crossterm::event::{KeyCode, KeyModifiers};

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Modifiers that must be held with `key`
    pub modifiers: KeyModifiers,
    /// Alternative key (e.g., Ctrl-P for Esc)
    pub alt_key: Option<(KeyCode, KeyModifiers)>,
    /// Human-readable description of what this shortcut does
    pub description: &'static str,
    /// Category for grouping in help
    pub category: ShortcutCategory,
    /// Context where this shortcut is active
    pub context: ShortcutContext,
    /// Shown in the footer hint line
    pub in_footer: bool,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Editing,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Every step
    Wizard,
    /// The template list on the first step
    TemplateList,
    /// The team member form
    TeamForm,
}

impl ShortcutCategory {
    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Editing,
        ]
    }
}

impl ShortcutContext {
    /// Display name for this context
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Wizard => "All Steps",
            ShortcutContext::TemplateList => "Choose Template",
            ShortcutContext::TeamForm => "Team",
        }
    }

    /// All contexts in display order
    pub fn all() -> &'static [ShortcutContext] {
        &[
            ShortcutContext::Wizard,
            ShortcutContext::TemplateList,
            ShortcutContext::TeamForm,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "Ctrl-S", "Esc/Ctrl-P")
    pub fn key_display(&self) -> String {
        let primary = format_key(&self.key, self.modifiers);
        match &self.alt_key {
            Some((alt, mods)) => format!("{}/{}", primary, format_key(alt, *mods)),
            None => primary,
        }
    }

    /// Format key for help dialog (left-padded to 12 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<12}", self.key_display())
    }
}

fn format_key(key: &KeyCode, modifiers: KeyModifiers) -> String {
    let name = format_keycode(key);
    if modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl-{}", name.to_uppercase())
    } else {
        name
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key),
    }
}

const NONE: KeyModifiers = KeyModifiers::NONE;
const CTRL: KeyModifiers = KeyModifiers::CONTROL;

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Every step ===
    Shortcut {
        key: KeyCode::Enter,
        modifiers: NONE,
        alt_key: None,
        description: "Continue (generate deck on the last step)",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::Char('n'),
        modifiers: CTRL,
        alt_key: None,
        description: "Next step",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::Esc,
        modifiers: NONE,
        alt_key: Some((KeyCode::Char('p'), CTRL)),
        description: "Previous step (Esc on the first step quits)",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::Tab,
        modifiers: NONE,
        alt_key: Some((KeyCode::BackTab, NONE)),
        description: "Next / previous field",
        category: ShortcutCategory::Editing,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::Char('s'),
        modifiers: CTRL,
        alt_key: None,
        description: "Save draft",
        category: ShortcutCategory::General,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::F(1),
        modifiers: NONE,
        alt_key: None,
        description: "Toggle help",
        category: ShortcutCategory::General,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    Shortcut {
        key: KeyCode::Char('c'),
        modifiers: CTRL,
        alt_key: None,
        description: "Quit",
        category: ShortcutCategory::General,
        context: ShortcutContext::Wizard,
        in_footer: true,
    },
    // === Template list ===
    Shortcut {
        key: KeyCode::Up,
        modifiers: NONE,
        alt_key: Some((KeyCode::Down, NONE)),
        description: "Highlight template",
        category: ShortcutCategory::Navigation,
        context: ShortcutContext::TemplateList,
        in_footer: false,
    },
    Shortcut {
        key: KeyCode::Char(' '),
        modifiers: NONE,
        alt_key: None,
        description: "Select highlighted template",
        category: ShortcutCategory::Editing,
        context: ShortcutContext::TemplateList,
        in_footer: false,
    },
    // === Team form ===
    Shortcut {
        key: KeyCode::Enter,
        modifiers: NONE,
        alt_key: None,
        description: "Add member (continue when the name is empty)",
        category: ShortcutCategory::Editing,
        context: ShortcutContext::TeamForm,
        in_footer: false,
    },
    Shortcut {
        key: KeyCode::Char('d'),
        modifiers: CTRL,
        alt_key: None,
        description: "Remove last member",
        category: ShortcutCategory::Editing,
        context: ShortcutContext::TeamForm,
        in_footer: false,
    },
];

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = SHORTCUTS
            .iter()
            .filter(|s| s.context == context && s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}

/// `(key, short description)` pairs for the footer
pub fn footer_hints() -> Vec<(String, &'static str)> {
    shortcuts_for_context(ShortcutContext::Wizard)
        .filter(|s| s.in_footer)
        .map(|s| {
            let short = s.description.split(" (").next().unwrap_or(s.description);
            (s.key_display(), short)
        })
        .collect()
}
