//! Configuration management for the TodoMVC example.
//!
//! Loads configuration from environment variables with sensible defaults.

use composable_ui_core::event::Key;
use std::env;

/// Default tracing filter when `TODOMVC_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todomvc=info,composable_ui_runtime=info";

/// Keys that commit or discard text in the new-todo and edit inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Commits the input (adds the todo / finishes the edit)
    pub confirm: Key,
    /// Discards the input (clears the new-todo box / cancels the edit)
    pub cancel: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            confirm: Key::Enter,
            cancel: Key::Escape,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Confirm/cancel keys
    pub keys: KeyBindings,
    /// Tracing filter directives
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// - `TODOMVC_CONFIRM_KEY` (default `Enter`)
    /// - `TODOMVC_CANCEL_KEY` (default `Escape`)
    /// - `TODOMVC_LOG` (default [`DEFAULT_LOG_FILTER`])
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read only the tracing filter from the environment
    ///
    /// Logging has to be installed before [`Config::from_env`] runs, or its
    /// fallback warnings have nowhere to go.
    #[must_use]
    pub fn log_filter_from_env() -> String {
        log_filter(&|name: &str| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = KeyBindings::default();
        let keys = KeyBindings {
            confirm: parse_key(lookup("TODOMVC_CONFIRM_KEY"), defaults.confirm),
            cancel: parse_key(lookup("TODOMVC_CANCEL_KEY"), defaults.cancel),
        };

        let log_filter = log_filter(&lookup);

        if keys.confirm == keys.cancel {
            tracing::warn!(
                key = %keys.confirm,
                "Confirm and cancel keys are identical; using defaults"
            );
            return Self {
                keys: KeyBindings::default(),
                log_filter,
            };
        }

        Self { keys, log_filter }
    }
}

fn log_filter(lookup: &impl Fn(&str) -> Option<String>) -> String {
    lookup("TODOMVC_LOG")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn parse_key(raw: Option<String>, default: Key) -> Key {
    let Some(raw) = raw else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        tracing::warn!(default = %default, "Empty key name; using default");
        return default;
    }
    match raw.parse() {
        Ok(key) => key,
        Err(never) => match never {},
    }
}
