//! Virtual view tree.
//!
//! A view is a pure function from state to an [`Html`] tree. Elements carry
//! event handlers that translate a [`DomEvent`] into an action; the runtime
//! keeps the latest tree, routes events into it, and serializes it with
//! [`Html::to_html`].

use crate::event::{DomEvent, EventKind, Key};
use crate::selector::Selector;
use std::fmt;

/// Translates an event payload into an optional action
pub type Handler<A> = Box<dyn Fn(&DomEvent) -> Option<A>>;

/// Tags serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// The View trait - renders state into a view tree
///
/// Views must be deterministic: the same state and environment always
/// render the same tree.
pub trait View {
    /// The state type this view renders
    type State;

    /// The action type produced by the rendered handlers
    type Action;

    /// The environment type with injected configuration
    type Environment;

    /// Render the current state
    fn view(&self, state: &Self::State, env: &Self::Environment) -> Html<Self::Action>;
}

/// An element of the view tree
pub struct Element<A> {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
    handlers: Vec<(EventKind, Handler<A>)>,
    children: Vec<Html<A>>,
}

/// A node of the view tree
pub enum Html<A> {
    /// An element with attributes, handlers, and children
    Element(Element<A>),
    /// A text node
    Text(String),
}

impl<A> fmt::Debug for Html<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => f
                .debug_struct("Element")
                .field("tag", &el.tag)
                .field("id", &el.id)
                .field("classes", &el.classes)
                .field("attributes", &el.attributes)
                .field(
                    "handlers",
                    &el.handlers.iter().map(|(kind, _)| kind).collect::<Vec<_>>(),
                )
                .field("children", &el.children)
                .finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl<A> Html<A> {
    /// Creates an empty element with the given tag
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(Element {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            handlers: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Creates a text node
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn map_element(mut self, f: impl FnOnce(&mut Element<A>)) -> Self {
        if let Self::Element(el) = &mut self {
            f(el);
        }
        self
    }

    /// Sets the element id
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.map_element(|el| el.id = Some(id.into()))
    }

    /// Adds a class
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.map_element(|el| el.classes.push(class.into()))
    }

    /// Adds a class only when `condition` holds
    #[must_use]
    pub fn class_if(self, class: impl Into<String>, condition: bool) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Sets a valued attribute
    #[must_use]
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_element(|el| el.attributes.push((name.into(), Some(value.into()))))
    }

    /// Sets a boolean attribute (present iff `on`)
    #[must_use]
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.map_element(|el| el.attributes.push((name.into(), None)))
        } else {
            self
        }
    }

    /// Appends a child node
    #[must_use]
    pub fn child(self, child: Self) -> Self {
        self.map_element(|el| el.children.push(child))
    }

    /// Appends child nodes
    #[must_use]
    pub fn children(self, children: impl IntoIterator<Item = Self>) -> Self {
        self.map_element(|el| el.children.extend(children))
    }

    fn on(self, kind: EventKind, handler: Handler<A>) -> Self {
        self.map_element(|el| el.handlers.push((kind, handler)))
    }
}

impl<A: 'static> Html<A> {
    /// Maps the new text value of an `input` event to an action
    #[must_use]
    pub fn on_input(self, f: impl Fn(String) -> A + 'static) -> Self {
        self.on(
            EventKind::Input,
            Box::new(move |event| match event {
                DomEvent::Input(value) => Some(f(value.clone())),
                _ => None,
            }),
        )
    }

    /// Maps a pressed key to an optional action
    #[must_use]
    pub fn on_key_down(self, f: impl Fn(&Key) -> Option<A> + 'static) -> Self {
        self.on(
            EventKind::KeyDown,
            Box::new(move |event| match event {
                DomEvent::KeyDown(key) => f(key),
                _ => None,
            }),
        )
    }

    /// Maps the new checked state of a checkbox to an action
    #[must_use]
    pub fn on_check(self, f: impl Fn(bool) -> A + 'static) -> Self {
        self.on(
            EventKind::Change,
            Box::new(move |event| match event {
                DomEvent::Check(checked) => Some(f(*checked)),
                _ => None,
            }),
        )
    }
}

impl<A: Clone + 'static> Html<A> {
    /// Dispatches `action` when the element is clicked
    #[must_use]
    pub fn on_click(self, action: A) -> Self {
        self.on(EventKind::Click, Box::new(move |_| Some(action.clone())))
    }

    /// Dispatches `action` when the element is double-clicked
    #[must_use]
    pub fn on_double_click(self, action: A) -> Self {
        self.on(EventKind::DoubleClick, Box::new(move |_| Some(action.clone())))
    }

    /// Dispatches `action` when the element loses focus
    #[must_use]
    pub fn on_blur(self, action: A) -> Self {
        self.on(EventKind::Blur, Box::new(move |_| Some(action.clone())))
    }
}

impl<A> Html<A> {
    /// The element's tag, or `None` for text nodes
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.tag),
            Self::Text(_) => None,
        }
    }

    /// The element's classes (empty for text nodes)
    #[must_use]
    pub fn classes(&self) -> &[String] {
        match self {
            Self::Element(el) => &el.classes,
            Self::Text(_) => &[],
        }
    }

    /// Whether the element carries `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// The value of an attribute; `Some("")` for boolean attributes that are present
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element(el) => el
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.as_deref().unwrap_or("")),
            Self::Text(_) => None,
        }
    }

    /// The element's children (empty for text nodes)
    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        match self {
            Self::Element(el) => &el.children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and all descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(el) => el.children.iter().map(Self::text_content).collect(),
        }
    }

    /// Finds the element selected by `selector`, searching this node and its
    /// descendants in document order
    #[must_use]
    pub fn find(&self, selector: &Selector) -> Option<&Self> {
        self.find_all(selector).into_iter().nth(selector.index)
    }

    /// All elements matching `selector` in document order (the selector's index is ignored)
    #[must_use]
    pub fn find_all(&self, selector: &Selector) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_matches(selector, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, selector: &Selector, found: &mut Vec<&'a Self>) {
        if let Self::Element(el) = self {
            if selector.matches(&el.tag, el.id.as_deref(), &el.classes) {
                found.push(self);
            }
            for child in &el.children {
                child.collect_matches(selector, found);
            }
        }
    }

    /// Runs this element's handler for the event, if it has one
    #[must_use]
    pub fn handle(&self, event: &DomEvent) -> Option<A> {
        let Self::Element(el) = self else {
            return None;
        };
        el.handlers
            .iter()
            .find(|(kind, _)| *kind == event.kind())
            .and_then(|(_, handler)| handler(event))
    }

    /// Serializes the tree to HTML markup
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(text, out),
            Self::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if let Some(id) = &el.id {
                    out.push_str(" id=\"");
                    escape_into(id, out);
                    out.push('"');
                }
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&el.classes.join(" "), out);
                    out.push('"');
                }
                for (name, value) in &el.attributes {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        escape_into(value, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
