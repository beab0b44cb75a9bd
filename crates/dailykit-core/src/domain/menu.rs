//! Menu actions for the interactive apps.
//!
//! Raw input is trimmed and lowercased before lookup, so `" A "` and `"add"`
//! both select the same action.

/// Normalize a raw menu choice for lookup.
pub fn normalize_choice(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Actions offered by the to-do list menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    Add,
    Remove,
    View,
    Clear,
    Exit,
}

impl TodoAction {
    /// Menu lines in display order.
    pub const MENU: [&'static str; 5] = ["A) Add.", "B) Remove.", "C) View.", "D) Clear.", "E) Exit."];

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_choice(raw).as_str() {
            "a" | "add" => Some(Self::Add),
            "b" | "remove" => Some(Self::Remove),
            "c" | "view" => Some(Self::View),
            "d" | "clear" => Some(Self::Clear),
            "e" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Actions offered by the habit tracker menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitAction {
    Add,
    Delete,
    View,
    Clear,
    Mark,
    Exit,
}

impl HabitAction {
    /// Menu lines in display order.
    pub const MENU: [&'static str; 6] = [
        "1) Add.",
        "2) Delete.",
        "3) View.",
        "4) Clear.",
        "5) Mark Complete",
        "6) Exit.",
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_choice(raw).as_str() {
            "1" | "add" => Some(Self::Add),
            "2" | "delete" => Some(Self::Delete),
            "3" | "view" => Some(Self::View),
            "4" | "clear" => Some(Self::Clear),
            "5" | "mark" | "mark complete" => Some(Self::Mark),
            "6" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}
