//! State transition history tracking.
//!
//! A `StateHistory` is an ordered log of the transitions an engine reported
//! to its observers. It carries no timestamps: the engine never reads a
//! clock, so ordering is the only notion of time the log has.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use moore::core::{State, StateTransition};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Valve {
///     Shut,
///     Open,
/// }
///
/// impl State for Valve {}
///
/// let transition = StateTransition {
///     from: Valve::Shut,
///     to: Valve::Open,
/// };
/// assert!(transition.is_change());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S: State> {
    /// The state before the transition
    pub from: S,
    /// The state after the transition
    pub to: S,
}

impl<S: State> StateTransition<S> {
    /// True when the transition actually moved to a different state.
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// `record` consumes the history and returns it with the transition
/// appended, so a history value is never modified behind a shared reference.
///
/// # Example
///
/// ```rust
/// use moore::core::{State, StateHistory, StateTransition};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Phase {
///     One,
///     Two,
///     Three,
/// }
///
/// impl State for Phase {}
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: Phase::One, to: Phase::Two })
///     .record(StateTransition { from: Phase::Two, to: Phase::Three });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Three]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the first
    /// transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions that changed the state.
    pub fn changes(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_change()).count()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State + 'static> StateHistory<S> {
    /// Build an observer callback that appends every notification to `log`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moore::core::{Input, State, StateHistory};
    /// use moore::engine::Machine;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// #[derive(Clone, Copy, PartialEq, Debug)]
    /// enum Lamp { Off, On }
    /// impl State for Lamp {}
    ///
    /// #[derive(Clone, Copy, PartialEq, Debug)]
    /// enum Event { Nothing, Toggle }
    /// impl Input for Event { const NONE: Self = Event::Nothing; }
    ///
    /// let mut machine: Machine<Lamp, Event> = Machine::new(
    ///     |lamp: &Lamp, event: &Event| match (lamp, event) {
    ///         (Lamp::Off, Event::Toggle) => Lamp::On,
    ///         (Lamp::On, Event::Toggle) => Lamp::Off,
    ///         (lamp, Event::Nothing) => *lamp,
    ///     },
    ///     Lamp::Off,
    /// );
    ///
    /// let log = Rc::new(RefCell::new(StateHistory::new()));
    /// machine.add_observer(StateHistory::observer(&log)).unwrap();
    /// machine.step(Event::Toggle);
    ///
    /// assert_eq!(log.borrow().get_path(), vec![&Lamp::Off, &Lamp::On]);
    /// ```
    pub fn observer(log: &Rc<RefCell<Self>>) -> impl Fn(&S, &S) + 'static {
        let log = Rc::clone(log);
        move |from: &S, to: &S| {
            let mut slot = log.borrow_mut();
            let history = std::mem::take(&mut *slot);
            *slot = history.record(StateTransition {
                from: from.clone(),
                to: to.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {}

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert_eq!(history.changes(), 0);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Initial,
                to: TestState::Processing,
            })
            .record(StateTransition {
                from: TestState::Processing,
                to: TestState::Complete,
            });

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn changes_skip_self_transitions() {
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Initial,
                to: TestState::Initial,
            })
            .record(StateTransition {
                from: TestState::Initial,
                to: TestState::Complete,
            });

        assert_eq!(history.len(), 2);
        assert_eq!(history.changes(), 1);
    }

    #[test]
    fn observer_appends_to_shared_log() {
        let log = Rc::new(RefCell::new(StateHistory::new()));
        let observer = StateHistory::observer(&log);

        observer(&TestState::Initial, &TestState::Processing);
        observer(&TestState::Processing, &TestState::Processing);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log.transitions()[1].from, TestState::Processing);
        assert!(!log.transitions()[1].is_change());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition {
            from: TestState::Initial,
            to: TestState::Processing,
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
