//! Application state and intent events for the TodoMVC example.
//!
//! The application state is the todo collection plus the transient UI state:
//! the text typed into the new-todo box and the item being edited inline.

use crate::store::{TodoId, TodoItem, Todos};
use serde::Serialize;

/// An inline edit in progress
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditingItem {
    /// The item being edited
    pub id: TodoId,
    /// The text typed so far
    pub text: String,
}

/// State of the TodoMVC application
///
/// Invariant: at most one item is edited at a time, and `editing` (when
/// present) refers to an item in `todos`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    /// All todos
    pub todos: Todos,
    /// Pending text of the new-todo box
    pub new_item_text: String,
    /// The inline edit in progress, if any
    pub editing: Option<EditingItem>,
}

impl TodoState {
    /// Creates an empty application state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty application state with text waiting in the new-todo box
    #[must_use]
    pub fn with_new_text(text: impl Into<String>) -> Self {
        Self {
            new_item_text: text.into(),
            ..Self::default()
        }
    }

    /// Whether `id` is the item currently being edited
    #[must_use]
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }
}

/// User intents
///
/// Every action is accepted; actions that do not apply to the current state
/// are no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// The new-todo box now contains this text
    SetNewText(String),
    /// Discard the text of the new-todo box
    ClearNewText,
    /// Create a todo from the new-todo box, then clear it
    AddTodo,
    /// Set the completed flag of one item
    CheckItem(TodoId, bool),
    /// Remove one item
    DeleteItem(TodoId),
    /// Start editing an item inline
    BeginEdit(TodoItem),
    /// The edit field now contains this text
    UpdateEditText(String),
    /// Commit the inline edit
    FinishEdit,
    /// Discard the inline edit
    CancelEdit,
    /// Remove every completed item
    ClearCompleted,
    /// Set the completed flag of every item
    ToggleAll(bool),
}
