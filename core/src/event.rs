//! DOM events delivered to rendered elements.
//!
//! The runtime routes a [`DomEvent`] to the element a selector points at, and
//! the element's handler for that [`EventKind`] decides which action (if any)
//! the event becomes.

use std::fmt;
use std::str::FromStr;

/// A keyboard key, as reported by a `keydown` event
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Return / Enter
    Enter,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// A printable character
    Char(char),
    /// Any other named key (`ArrowUp`, `F5`, ...)
    Named(String),
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Parses a key name. Matching of the well-known names is case-insensitive;
    /// a single character is a [`Key::Char`], anything else is [`Key::Named`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "enter" | "return" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            "tab" => Self::Tab,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Named(s.to_string()),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("Enter"),
            Self::Escape => f.write_str("Escape"),
            Self::Tab => f.write_str("Tab"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// The kind of a DOM event, used to look up handlers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Text input changed
    Input,
    /// Key pressed
    KeyDown,
    /// Element lost focus
    Blur,
    /// Single click
    Click,
    /// Double click
    DoubleClick,
    /// Checkbox toggled
    Change,
}

/// A DOM event with its payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomEvent {
    /// The element's text value is now the given string
    Input(String),
    /// A key was pressed while the element had focus
    KeyDown(Key),
    /// The element lost focus
    Blur,
    /// The element was clicked
    Click,
    /// The element was double-clicked
    DoubleClick,
    /// A checkbox is now checked (`true`) or unchecked (`false`)
    Check(bool),
}

impl DomEvent {
    /// Returns the kind of this event
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Input(_) => EventKind::Input,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::Blur => EventKind::Blur,
            Self::Click => EventKind::Click,
            Self::DoubleClick => EventKind::DoubleClick,
            Self::Check(_) => EventKind::Change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        match s.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }

    #[test]
    fn parses_well_known_keys_case_insensitively() {
        assert_eq!(key("Enter"), Key::Enter);
        assert_eq!(key("RETURN"), Key::Enter);
        assert_eq!(key("esc"), Key::Escape);
        assert_eq!(key("Escape"), Key::Escape);
        assert_eq!(key("tab"), Key::Tab);
    }

    #[test]
    fn parses_characters_and_named_keys() {
        assert_eq!(key("a"), Key::Char('a'));
        assert_eq!(key("é"), Key::Char('é'));
        assert_eq!(key("ArrowUp"), Key::Named("ArrowUp".to_string()));
    }

    #[test]
    fn display_round_trips_names() {
        for name in ["Enter", "Escape", "Tab", "q", "F5"] {
            assert_eq!(key(name).to_string(), name);
        }
    }

    #[test]
    fn event_kinds() {
        assert_eq!(DomEvent::Input(String::new()).kind(), EventKind::Input);
        assert_eq!(DomEvent::KeyDown(Key::Enter).kind(), EventKind::KeyDown);
        assert_eq!(DomEvent::Check(true).kind(), EventKind::Change);
        assert_eq!(DomEvent::DoubleClick.kind(), EventKind::DoubleClick);
    }
}
