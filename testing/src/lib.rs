//! # Composable UI Testing
//!
//! Testing utilities and helpers for the Composable UI architecture.
//!
//! This crate provides:
//! - A Given-When-Then builder for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - Property-based testing strategies for user-entered text
//!
//! ## Example
//!
//! ```ignore
//! use composable_ui_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn test_add_todo() {
//!     ReducerTest::new(TodoReducer::new())
//!         .with_env(TodoEnvironment::default())
//!         .given_state(TodoState::with_new_text("Buy milk"))
//!         .when_action(TodoAction::AddTodo)
//!         .then_state(|state| assert_eq!(state.todos.len(), 1))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```

/// Given-When-Then reducer tests
pub mod reducer_test;

/// Property-based testing strategies
///
/// Strategies for the text a user can type into an input, split by whether
/// it counts as blank (empty or whitespace only).
pub mod properties {
    use proptest::prelude::*;

    /// Text that is empty or made only of whitespace
    pub fn blank_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\u{a0}')], 0..8)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Text containing at least one non-whitespace character, possibly padded
    pub fn non_blank_text() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 ,.!?-]{0,30}", "[ \t]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Any text, blank or not
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![blank_text(), non_blank_text(), ".{0,20}"]
    }
}

pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::properties::{blank_text, non_blank_text};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn blank_text_trims_to_empty(text in blank_text()) {
            prop_assert!(text.trim().is_empty());
        }

        #[test]
        fn non_blank_text_survives_trim(text in non_blank_text()) {
            prop_assert!(!text.trim().is_empty());
        }
    }
}
