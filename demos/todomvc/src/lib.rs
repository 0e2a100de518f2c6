//! TodoMVC example demonstrating an interactive application on Composable UI.
//!
//! This example shows how to build the classic TodoMVC task list. It
//! demonstrates:
//!
//! - A persistent value type for the domain ([`Todos`]): every operation
//!   returns a new collection
//! - Transient UI state (new-todo text, inline edit) next to domain state
//! - A total reducer: every intent is accepted, inapplicable ones are no-ops
//! - A pure view producing the TodoMVC markup and class names
//! - Keyboard handling through injected [`KeyBindings`]
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use composable_ui_core::event::{DomEvent, Key};
//! use composable_ui_core::selector::Selector;
//! use todomvc::{program, TodoEnvironment};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = program(TodoEnvironment::default());
//! let new_todo = Selector::class("new-todo");
//!
//! app.dispatch(&new_todo, DomEvent::Input("Buy milk".to_string()))?;
//! app.dispatch(&new_todo, DomEvent::KeyDown(Key::Enter))?;
//! app.dispatch(&Selector::class("toggle"), DomEvent::Check(true))?;
//!
//! assert_eq!(app.state(|s| s.todos.completed_todos().count()), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reducer;
pub mod script;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{Config, KeyBindings};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoId, TodoItem, Todos};
pub use types::{EditingItem, TodoAction, TodoState};
pub use view::TodoView;

use composable_ui_runtime::Program;

/// The TodoMVC application wired to the runtime
pub type TodoProgram = Program<TodoState, TodoAction, TodoEnvironment, TodoReducer, TodoView>;

/// Creates a TodoMVC program with an empty todo list
#[must_use]
pub fn program(env: TodoEnvironment) -> TodoProgram {
    Program::new(TodoState::new(), TodoReducer::new(), TodoView::new(), env)
}
