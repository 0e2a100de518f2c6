//! # Composable UI Runtime
//!
//! Runtime implementation for the Composable UI architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution,
//! and the Program that couples a store with a view.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment; folds one action at a time
//! - **Program**: Renders the view, routes DOM events to actions, executes effects
//! - **Event Loop**: event → action → reducer → effects → re-render
//!
//! Everything runs on the caller's thread. `send` and `dispatch` return only
//! after the action has been folded, the view re-rendered and all effects
//! executed, so there is never more than one action in flight.
//!
//! ## Example
//!
//! ```ignore
//! use composable_ui_runtime::Program;
//!
//! let mut program = Program::new(initial_state, my_reducer, my_view, environment);
//!
//! // Route a DOM event to the element matched by a selector
//! program.dispatch(&".new-todo".parse()?, DomEvent::KeyDown(Key::Enter))?;
//!
//! // Read state
//! let value = program.state(|s| s.some_field);
//! ```

use composable_ui_core::{
    effect::Effect,
    event::DomEvent,
    reducer::Reducer,
    selector::Selector,
    view::{Html, View},
    SmallVec,
};
use std::fmt::Debug;

/// Error types for the runtime
pub mod error {
    use composable_ui_core::selector::SelectorError;
    use thiserror::Error;

    /// Errors that can occur while routing events
    ///
    /// Reducers themselves never fail; only event routing can.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum RuntimeError {
        /// No element in the current document matches the selector
        #[error("no element matches selector `{selector}`")]
        ElementNotFound {
            /// The selector that matched nothing
            selector: String,
        },

        /// A selector string could not be parsed
        #[error("invalid selector: {0}")]
        InvalidSelector(#[from] SelectorError),
    }
}

pub use error::RuntimeError;

/// The Store - runtime for a reducer
///
/// Owns the state, the reducer and the environment. Actions are folded one
/// at a time; effects returned by the reducer are handed back to the caller.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Fold an action into the state
    ///
    /// Returns the effects produced by the reducer. The store does not
    /// execute them; a [`Program`] does.
    #[tracing::instrument(skip(self), name = "store_send")]
    pub fn send(&mut self, action: A) -> SmallVec<[Effect; 4]> {
        tracing::debug!("Processing action");
        metrics::counter!("store.actions.total").increment(1);

        let start = std::time::Instant::now();
        let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
        metrics::histogram!("store.reducer.duration_seconds").record(start.elapsed().as_secs_f64());

        // Note: Precision loss acceptable for metrics (effect counts < 2^52)
        #[allow(clippy::cast_precision_loss)]
        metrics::histogram!("store.effects.count").record(effects.len() as f64);

        tracing::trace!("Reducer completed, returned {} effects", effects.len());
        effects
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let todo_count = store.state(|s| s.todos.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// The injected environment
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }

    /// Consume the store, returning its final state
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }
}

/// A Store paired with a View
///
/// The program keeps the most recently rendered document. DOM events are
/// routed into that document; the handler of the targeted element turns the
/// event into an action, which is folded, after which the document is
/// re-rendered and effects executed.
pub struct Program<S, A, E, R, V>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    V: View<State = S, Action = A, Environment = E>,
{
    store: Store<S, A, E, R>,
    view: V,
    document: Html<A>,
    focused: Option<String>,
}

impl<S, A, E, R, V> Program<S, A, E, R, V>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    V: View<State = S, Action = A, Environment = E>,
    A: Debug + Clone,
{
    /// Create a program and render its initial document
    #[must_use]
    pub fn new(initial_state: S, reducer: R, view: V, environment: E) -> Self {
        let document = view.view(&initial_state, &environment);
        Self {
            store: Store::new(initial_state, reducer, environment),
            view,
            document,
            focused: None,
        }
    }

    /// Route a DOM event to the element matched by `selector`
    ///
    /// Returns the action the event produced, or `None` if the element has
    /// no handler for this kind of event (a no-op).
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::ElementNotFound`] if no element in the current
    /// document matches the selector.
    #[tracing::instrument(skip(self), fields(selector = %selector), name = "program_dispatch")]
    pub fn dispatch(&mut self, selector: &Selector, event: DomEvent) -> Result<Option<A>, RuntimeError> {
        let element = self
            .document
            .find(selector)
            .ok_or_else(|| RuntimeError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        let Some(action) = element.handle(&event) else {
            tracing::trace!("Element has no handler for this event");
            return Ok(None);
        };

        self.send(action.clone());
        Ok(Some(action))
    }

    /// Send an action directly, bypassing event routing
    pub fn send(&mut self, action: A) {
        let effects = self.store.send(action);
        self.render();
        for effect in effects {
            self.execute(effect);
        }
    }

    fn render(&mut self) {
        self.document = self
            .store
            .state(|state| self.view.view(state, self.store.environment()));
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Focus(id) => {
                if self.document.find(&Selector::id(id.clone())).is_some() {
                    tracing::trace!(element = %id, "Focus moved");
                    self.focused = Some(id);
                } else {
                    tracing::warn!(element = %id, "Cannot focus: element not in document");
                }
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    self.execute(effect);
                }
            }
        }
    }

    /// Read current state via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        self.store.state(f)
    }

    /// The most recently rendered document
    #[must_use]
    pub const fn document(&self) -> &Html<A> {
        &self.document
    }

    /// The most recently rendered document as HTML markup
    #[must_use]
    pub fn render_html(&self) -> String {
        self.document.to_html()
    }

    /// Id of the element holding keyboard focus, if a focus effect has run
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// The injected environment
    #[must_use]
    pub const fn environment(&self) -> &E {
        self.store.environment()
    }

    /// Consume the program, returning its final state
    #[must_use]
    pub fn into_state(self) -> S {
        self.store.into_state()
    }
}
