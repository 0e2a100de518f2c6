//! View for the TodoMVC application.
//!
//! Renders the application state into the standard TodoMVC markup. The class
//! names are the hooks the TodoMVC stylesheet expects and must not change.

use crate::config::KeyBindings;
use crate::reducer::TodoEnvironment;
use crate::store::TodoItem;
use crate::types::{TodoAction, TodoState};
use composable_ui_core::event::Key;
use composable_ui_core::view::{Html, View};

/// Renders [`TodoState`]
#[derive(Clone, Debug, Default)]
pub struct TodoView;

impl TodoView {
    /// Creates a new `TodoView`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Maps the confirm key to `confirm` and the cancel key to `cancel`
fn keyboard(
    keys: &KeyBindings,
    confirm: TodoAction,
    cancel: TodoAction,
) -> impl Fn(&Key) -> Option<TodoAction> + 'static {
    let keys = keys.clone();
    move |key| {
        if *key == keys.confirm {
            Some(confirm.clone())
        } else if *key == keys.cancel {
            Some(cancel.clone())
        } else {
            None
        }
    }
}

fn header(state: &TodoState, keys: &KeyBindings) -> Html<TodoAction> {
    Html::element("header")
        .class("header")
        .child(Html::element("h1").child(Html::text("todos")))
        .child(
            Html::element("input")
                .class("new-todo")
                .attr("placeholder", "What needs to be done?")
                .flag("autofocus", true)
                .attr("value", state.new_item_text.clone())
                .on_input(TodoAction::SetNewText)
                .on_key_down(keyboard(keys, TodoAction::AddTodo, TodoAction::ClearNewText))
                .on_blur(TodoAction::ClearNewText),
        )
}

fn item_row(item: &TodoItem, state: &TodoState, keys: &KeyBindings) -> Html<TodoAction> {
    let editing = state.editing.as_ref().filter(|edit| edit.id == item.id);
    let edit_text = editing.map_or(item.text.as_str(), |edit| edit.text.as_str());
    let id = item.id;

    Html::element("li")
        .class_if("completed", item.completed)
        .class_if("editing", editing.is_some())
        .child(
            Html::element("div")
                .class("view")
                .child(
                    Html::element("input")
                        .class("toggle")
                        .attr("type", "checkbox")
                        .flag("checked", item.completed)
                        .on_check(move |checked| TodoAction::CheckItem(id, checked)),
                )
                .child(
                    Html::element("label")
                        .on_double_click(TodoAction::BeginEdit(item.clone()))
                        .child(Html::text(item.text.clone())),
                )
                .child(
                    Html::element("button")
                        .class("destroy")
                        .on_click(TodoAction::DeleteItem(id)),
                ),
        )
        .child(
            Html::element("input")
                .id(id.to_dom_id())
                .class("edit")
                .attr("value", edit_text)
                .on_input(TodoAction::UpdateEditText)
                .on_key_down(keyboard(keys, TodoAction::FinishEdit, TodoAction::CancelEdit))
                .on_blur(TodoAction::CancelEdit),
        )
}

fn main_section(state: &TodoState, keys: &KeyBindings) -> Html<TodoAction> {
    Html::element("section")
        .class("main")
        .child(
            Html::element("input")
                .id("toggle-all")
                .class("toggle-all")
                .attr("type", "checkbox")
                .flag("checked", state.todos.all_completed())
                .on_check(TodoAction::ToggleAll),
        )
        .child(
            Html::element("label")
                .attr("for", "toggle-all")
                .child(Html::text("Mark all as complete")),
        )
        .child(
            Html::element("ul").class("todo-list").children(
                state
                    .todos
                    .all_todos()
                    .iter()
                    .map(|item| item_row(item, state, keys)),
            ),
        )
}

/// Counts every item, completed or not
fn footer(state: &TodoState) -> Html<TodoAction> {
    let count = state.todos.len();
    let noun = if count == 1 { "item" } else { "items" };

    Html::element("footer")
        .class("footer")
        .child(
            Html::element("span")
                .class("todo-count")
                .child(Html::element("strong").child(Html::text(count.to_string())))
                .child(Html::text(format!(" {noun} left"))),
        )
        .child(
            Html::element("button")
                .class("clear-completed")
                .on_click(TodoAction::ClearCompleted)
                .child(Html::text("Clear completed")),
        )
}

impl View for TodoView {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn view(&self, state: &TodoState, env: &TodoEnvironment) -> Html<TodoAction> {
        Html::element("section")
            .class("todoapp")
            .child(header(state, &env.keys))
            .child(main_section(state, &env.keys))
            .child(footer(state))
    }
}
