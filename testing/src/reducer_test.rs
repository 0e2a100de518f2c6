//! Scenario tests for reducers.
//!
//! A scenario starts from a known state, folds a sequence of user intents
//! through the reducer exactly as the runtime would, then checks the final
//! state and the effects of the last intent. No view or runtime is involved.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use composable_ui_core::{effect::Effect, reducer::Reducer};

/// Check run against the final state
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Check run against the last intent's effects
type EffectAssertion = Box<dyn FnOnce(&[Effect])>;

/// A reducer scenario: given a state, when these intents arrive, then...
///
/// Repeated `when_action` calls queue intents; `run` folds them in order.
///
/// # Example
///
/// ```ignore
/// use composable_ui_testing::{assertions, ReducerTest};
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(TodoEnvironment::default())
///     .given_state(state_with_one_item)
///     .when_action(TodoAction::BeginEdit(item))
///     .when_action(TodoAction::UpdateEditText("Walk cat".to_string()))
///     .when_action(TodoAction::FinishEdit)
///     .then_state(|state| assert!(state.editing.is_none()))
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Starts a scenario for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Environment passed to every fold
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// State the scenario starts from
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queues an intent; intents are folded in the order queued
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Checks the state after the last intent
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Checks the effects returned by the last intent
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Folds the queued intents and runs every check
    ///
    /// # Panics
    ///
    /// Panics if the scenario has no starting state, no environment or no
    /// intents, or if a check fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("scenario has no starting state; call given_state()");

        assert!(!self.actions.is_empty(), "scenario has no intents; call when_action()");

        let env = self
            .environment
            .expect("scenario has no environment; call with_env()");

        let mut effects = Vec::new();
        for action in self.actions {
            effects = self.reducer.reduce(&mut state, action, &env).into_vec();
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Checks for the effects a scenario produced
pub mod assertions {
    use composable_ui_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if any effect would do something.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects(effects: &[Effect]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count(effects: &[Effect], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects move focus to the element with the given id
    ///
    /// # Panics
    ///
    /// Panics if no `Focus` effect (at any `Batch` depth) targets `element_id`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_focuses(effects: &[Effect], element_id: &str) {
        fn focuses(effect: &Effect, element_id: &str) -> bool {
            match effect {
                Effect::None => false,
                Effect::Focus(id) => id == element_id,
                Effect::Batch(effects) => effects.iter().any(|e| focuses(e, element_id)),
            }
        }

        assert!(
            effects.iter().any(|e| focuses(e, element_id)),
            "Expected focus on `{element_id}`, but effects were {effects:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_ui_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct DraftState {
        length: i32,
    }

    #[derive(Clone, Debug)]
    enum DraftAction {
        TypeChar,
        Backspace,
        Reveal,
    }

    struct DraftReducer;

    struct DraftEnv;

    impl Reducer for DraftReducer {
        type State = DraftState;
        type Action = DraftAction;
        type Environment = DraftEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]> {
            match action {
                DraftAction::TypeChar => {
                    state.length += 1;
                    smallvec![Effect::None]
                }
                DraftAction::Backspace => {
                    state.length -= 1;
                    smallvec![Effect::None]
                }
                DraftAction::Reveal => smallvec![Effect::batch(vec![Effect::focus("draft")])],
            }
        }
    }

    #[test]
    fn single_intent_updates_state() {
        ReducerTest::new(DraftReducer)
            .with_env(DraftEnv)
            .given_state(DraftState { length: 0 })
            .when_action(DraftAction::TypeChar)
            .then_state(|state| {
                assert_eq!(state.length, 1);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn intents_fold_in_order_and_last_effects_win() {
        ReducerTest::new(DraftReducer)
            .with_env(DraftEnv)
            .given_state(DraftState { length: 5 })
            .when_action(DraftAction::Backspace)
            .when_action(DraftAction::Backspace)
            .when_action(DraftAction::Reveal)
            .then_state(|state| {
                assert_eq!(state.length, 3);
            })
            .then_effects(|effects| assertions::assert_focuses(effects, "draft"))
            .run();
    }

    #[test]
    fn no_op_effects_count_as_none() {
        assertions::assert_no_effects(&[Effect::None]);
        assertions::assert_no_effects(&[]);
    }

    #[test]
    fn effect_count_is_exact() {
        assertions::assert_effects_count(&[Effect::None], 1);
        assertions::assert_effects_count(&[], 0);
    }

    #[test]
    #[should_panic(expected = "Expected focus")]
    fn focus_on_another_element_fails() {
        assertions::assert_focuses(&[Effect::focus("a")], "b");
    }
}
