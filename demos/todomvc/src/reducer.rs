//! Reducer logic for the TodoMVC application.
//!
//! Each intent is folded into the application state by replacing the todo
//! collection with the value returned by a [`Todos`] operation. Every intent
//! is accepted; ones that do not apply are no-ops.

use crate::config::KeyBindings;
use crate::store::Todos;
use crate::types::{EditingItem, TodoAction, TodoState};
use composable_ui_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment dependencies for the TodoMVC reducer and view
#[derive(Clone, Debug, Default)]
pub struct TodoEnvironment {
    /// Keys that confirm or cancel text input
    pub keys: KeyBindings,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }
}

/// Reducer for the TodoMVC application
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Drops the edit session if its item no longer exists
    fn forget_missing_edit(state: &mut TodoState) {
        let missing = state
            .editing
            .as_ref()
            .is_some_and(|edit| state.todos.get(edit.id).is_none());
        if missing {
            tracing::debug!("Edited item was removed; ending edit");
            state.editing = None;
        }
    }

    /// Removes every item completed in `todos`, as of that value
    fn clear_completed(todos: &Todos) -> Todos {
        todos
            .completed_todos()
            .map(|item| item.id)
            .fold(todos.clone(), |acc, id| acc.delete_item(id))
    }

    /// Sets the completed flag of every item in `todos`
    fn toggle_all(todos: &Todos, completed: bool) -> Todos {
        todos
            .all_todos()
            .iter()
            .map(|item| item.id)
            .fold(todos.clone(), |acc, id| acc.set_completed(completed, id).1)
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            // ========== New-todo box ==========
            TodoAction::SetNewText(text) => {
                state.new_item_text = text;
            }

            TodoAction::ClearNewText => {
                state.new_item_text.clear();
            }

            TodoAction::AddTodo => {
                let (id, todos) = state.todos.add_new(&state.new_item_text);
                if let Some(id) = id {
                    tracing::debug!(%id, "Todo added");
                }
                state.todos = todos;
                state.new_item_text.clear();
            }

            // ========== Items ==========
            TodoAction::CheckItem(id, completed) => {
                state.todos = state.todos.set_completed(completed, id).1;
            }

            TodoAction::DeleteItem(id) => {
                state.todos = state.todos.delete_item(id);
                Self::forget_missing_edit(state);
            }

            // ========== Inline edit ==========
            TodoAction::BeginEdit(item) => {
                if state.todos.get(item.id).is_none() {
                    return smallvec![Effect::None];
                }
                state.editing = Some(EditingItem {
                    id: item.id,
                    text: item.text,
                });
                return smallvec![Effect::focus(item.id.to_dom_id())];
            }

            TodoAction::UpdateEditText(text) => {
                if let Some(edit) = &mut state.editing {
                    edit.text = text;
                }
            }

            TodoAction::FinishEdit => {
                if let Some(edit) = state.editing.take() {
                    state.todos = state.todos.set_text(&edit.text, edit.id).1;
                }
            }

            TodoAction::CancelEdit => {
                state.editing = None;
            }

            // ========== Bulk ==========
            TodoAction::ClearCompleted => {
                state.todos = Self::clear_completed(&state.todos);
                Self::forget_missing_edit(state);
            }

            TodoAction::ToggleAll(completed) => {
                state.todos = Self::toggle_all(&state.todos, completed);
            }
        }

        smallvec![Effect::None]
    }
}
