//! The todo collection.
//!
//! [`Todos`] is an ordered collection of [`TodoItem`]s keyed by [`TodoId`].
//! It is a plain value: every operation takes `&self` and returns a new
//! collection, leaving the original untouched. Operations never fail; a
//! missing id or blank text makes them a no-op.

use serde::Serialize;
use std::fmt;

/// Unique identifier for a todo item
///
/// Assigned by [`Todos::add_new`] from a monotonically increasing counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Element id of this item's edit field (`todo-<n>`)
    ///
    /// Distinct ids always render to distinct strings.
    #[must_use]
    pub fn to_dom_id(self) -> String {
        format!("todo-{}", self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs to be done
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Ordered collection of todo items plus the next-id counter
///
/// Invariants: ids are unique, and items keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Todos {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl Todos {
    /// An empty collection
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a new item with the trimmed `text`
    ///
    /// Blank (empty or whitespace-only) text creates nothing and returns the
    /// collection unchanged with no id.
    #[must_use]
    pub fn add_new(&self, text: &str) -> (Option<TodoId>, Self) {
        let text = text.trim();
        if text.is_empty() {
            return (None, self.clone());
        }

        let id = TodoId(self.next_id);
        let mut items = self.items.clone();
        items.push(TodoItem::new(id, text.to_string()));
        (
            Some(id),
            Self {
                items,
                next_id: self.next_id + 1,
            },
        )
    }

    /// Replaces one item, returning the updated item and collection
    fn update(&self, id: TodoId, f: impl FnOnce(&mut TodoItem)) -> (Option<TodoItem>, Self) {
        let Some(position) = self.position(id) else {
            return (None, self.clone());
        };

        let mut next = self.clone();
        let item = &mut next.items[position];
        f(item);
        let updated = item.clone();
        (Some(updated), next)
    }

    /// Sets the completed flag of the item with `id`, keeping its position
    #[must_use]
    pub fn set_completed(&self, completed: bool, id: TodoId) -> (Option<TodoItem>, Self) {
        self.update(id, |item| item.completed = completed)
    }

    /// Replaces the text of the item with `id`, keeping its position
    ///
    /// Unlike [`Todos::add_new`] the text is stored exactly as given: it is
    /// neither trimmed nor rejected when blank.
    #[must_use]
    pub fn set_text(&self, text: &str, id: TodoId) -> (Option<TodoItem>, Self) {
        self.update(id, |item| item.text = text.to_string())
    }

    /// Removes the item with `id`, if present
    #[must_use]
    pub fn delete_item(&self, id: TodoId) -> Self {
        Self {
            items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
            next_id: self.next_id,
        }
    }

    /// All items in insertion order
    #[must_use]
    pub fn all_todos(&self) -> &[TodoItem] {
        &self.items
    }

    /// The completed items, in insertion order
    pub fn completed_todos(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter().filter(|item| item.completed)
    }

    /// Whether the collection has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether there is at least one item and every item is completed
    #[must_use]
    pub fn all_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The item with `id`, if present
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
