//! # Composable UI Core
//!
//! Core traits and types for the Composable UI architecture.
//!
//! This crate provides the fundamental abstractions for building interactive,
//! single-threaded user interfaces using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Application state for a feature
//! - **Action**: All possible user intents a reducer understands
//! - **Reducer**: Fold `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **View**: Pure function `State → Html<Action>`
//! - **Environment**: Injected configuration and dependencies
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow: event → action → reducer → state → view
//! - Explicit Effects (no hidden I/O)
//! - One action is fully folded before the next is accepted
//!
//! ## Example
//!
//! ```
//! use composable_ui_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// DOM events and keyboard keys delivered to view handlers
pub mod event;

/// Element selectors used to target events at rendered elements
pub mod selector;

/// Virtual view tree and the `View` trait
pub mod view;

/// Reducer module - The core trait for application logic
///
/// Reducers fold one action into state: `(State, Action, Environment) → (State, Effects)`.
///
/// They contain all application logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for application logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a synchronous, total function that:
        /// 1. Interprets the action against current state
        /// 2. Replaces state with the next state
        /// 3. Returns effect descriptions to be executed by the runtime
        ///
        /// Actions that do not apply to the current state are no-ops.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe work for the runtime to perform once the reducer has
/// returned. They are values, executed synchronously and in order.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the runtime after the view is re-rendered.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// No-op effect
        None,

        /// Move keyboard focus to the element with this id
        Focus(String),

        /// Run effects in order
        Batch(Vec<Effect>),
    }

    impl Effect {
        /// Focus the element with the given id
        #[must_use]
        pub fn focus(element_id: impl Into<String>) -> Self {
            Self::Focus(element_id.into())
        }

        /// Combine effects to run in order
        #[must_use]
        pub const fn batch(effects: Vec<Self>) -> Self {
            Self::Batch(effects)
        }

        /// Whether executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Focus(_) => false,
                Self::Batch(effects) => effects.iter().all(Self::is_none),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[test]
    fn empty_batch_is_none() {
        assert!(Effect::None.is_none());
        assert!(Effect::batch(vec![]).is_none());
        assert!(Effect::batch(vec![Effect::None, Effect::batch(vec![])]).is_none());
    }

    #[test]
    fn focus_is_not_none() {
        assert!(!Effect::focus("todo-1").is_none());
        assert!(!Effect::batch(vec![Effect::None, Effect::focus("x")]).is_none());
    }
}
