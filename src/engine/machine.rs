//! The machine-stepping engine.

use crate::core::{Input, Observer, State};
use crate::engine::diagnostics::Diagnostics;
use crate::engine::error::ObserverError;
use crate::engine::output::{OutputModel, TransitionFn};
use crate::engine::registry::{ObserverId, ObserverRegistry};
use std::fmt;
use tracing::{debug, trace};

/// Deepest follow-up a single `step` call will apply.
///
/// Depth 0 is the caller's input, so one `step` applies at most
/// `MAX_FEEDBACK_DEPTH + 1` transitions. A follow-up produced at the ceiling
/// is dropped and counted in [`Diagnostics::discarded_follow_ups`].
pub const MAX_FEEDBACK_DEPTH: usize = 3;

/// Observer slots a machine has unless its type says otherwise.
pub const DEFAULT_OBSERVER_CAPACITY: usize = 8;

/// A Moore machine M = (Q, Σ, δ, λ, q₀) driven by explicit `step` calls.
///
/// `S` is the state type, `I` the input alphabet, `O` the pulled output type
/// (unused with the feedback model) and `N` the observer capacity.
///
/// # Example
///
/// ```rust
/// use moore::core::{Input, State};
/// use moore::engine::Machine;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Lamp { Off, On }
/// impl State for Lamp {}
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Event { Nothing, Toggle }
/// impl Input for Event { const NONE: Self = Event::Nothing; }
///
/// fn toggle(lamp: &Lamp, event: &Event) -> Lamp {
///     match (lamp, event) {
///         (Lamp::Off, Event::Toggle) => Lamp::On,
///         (Lamp::On, Event::Toggle) => Lamp::Off,
///         (lamp, Event::Nothing) => *lamp,
///     }
/// }
///
/// let mut machine = Machine::new(toggle, Lamp::Off).with_pulled_output(|lamp: &Lamp| {
///     *lamp == Lamp::On
/// });
///
/// machine.step(Event::Toggle);
/// assert_eq!(machine.state(), &Lamp::On);
/// assert_eq!(machine.current_output(), Some(true));
/// ```
pub struct Machine<S: State, I: Input, O = (), const N: usize = { DEFAULT_OBSERVER_CAPACITY }> {
    current: S,
    delta: Option<TransitionFn<S, I>>,
    output: OutputModel<S, I, O>,
    observers: ObserverRegistry<S, N>,
    settled: Vec<(S, S)>,
    diagnostics: Diagnostics,
}

impl<S: State, I: Input, O> Machine<S, I, O, { DEFAULT_OBSERVER_CAPACITY }> {
    /// Create a machine from a transition function and an initial state.
    ///
    /// The machine gets [`DEFAULT_OBSERVER_CAPACITY`] observer slots; use
    /// [`Machine::with_observer_capacity`] for another registry size.
    pub fn new<F>(transition: F, initial: S) -> Self
    where
        F: Fn(&S, &I) -> S + 'static,
    {
        Self::with_observer_capacity(transition, initial)
    }

    /// Create a machine with no transition function.
    ///
    /// Stepping it leaves the state as it is, runs no output function and
    /// notifies no observers.
    pub fn without_transition(initial: S) -> Self {
        Self::from_parts(None, OutputModel::None, initial)
    }
}

impl<S: State, I: Input, O, const N: usize> Machine<S, I, O, N> {
    /// Create a machine whose observer registry holds `N` observers.
    ///
    /// ```rust
    /// use moore::engine::Machine;
    /// use moore::{input_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Lamp { Off, On }
    /// }
    ///
    /// input_enum! {
    ///     enum Event { Nothing, Toggle }
    ///     none: Nothing
    /// }
    ///
    /// let machine: Machine<Lamp, Event, (), 2> =
    ///     Machine::with_observer_capacity(|lamp: &Lamp, _: &Event| *lamp, Lamp::Off);
    /// assert_eq!(machine.observer_capacity(), 2);
    /// ```
    pub fn with_observer_capacity<F>(transition: F, initial: S) -> Self
    where
        F: Fn(&S, &I) -> S + 'static,
    {
        Self::from_parts(Some(Box::new(transition)), OutputModel::None, initial)
    }

    pub(crate) fn from_parts(
        delta: Option<TransitionFn<S, I>>,
        output: OutputModel<S, I, O>,
        initial: S,
    ) -> Self {
        Self {
            current: initial,
            delta,
            output,
            observers: ObserverRegistry::new(),
            settled: Vec::with_capacity(MAX_FEEDBACK_DEPTH + 1),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Use the pulled output model with `output` as λ: Q → Γ.
    pub fn with_pulled_output<F>(mut self, output: F) -> Self
    where
        F: Fn(&S) -> O + 'static,
    {
        self.set_pulled_output(output);
        self
    }

    /// Use the self-feeding output model with `output` as λ: Q × Q → Σ.
    pub fn with_feedback<F>(mut self, output: F) -> Self
    where
        F: FnMut(&S, &S) -> I + 'static,
    {
        self.set_feedback(output);
        self
    }

    pub fn set_pulled_output<F>(&mut self, output: F)
    where
        F: Fn(&S) -> O + 'static,
    {
        self.set_output(OutputModel::pulled(output));
    }

    pub fn set_feedback<F>(&mut self, output: F)
    where
        F: FnMut(&S, &S) -> I + 'static,
    {
        self.set_output(OutputModel::feedback(output));
    }

    /// Replace the output strategy.
    pub fn set_output(&mut self, output: OutputModel<S, I, O>) {
        debug!(
            from = self.output.kind(),
            to = output.kind(),
            "output model changed"
        );
        self.output = output;
    }

    pub fn clear_output(&mut self) {
        self.set_output(OutputModel::None);
    }

    pub fn output_model(&self) -> &OutputModel<S, I, O> {
        &self.output
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Evaluate the pulled output function on the current state.
    ///
    /// Runs λ on every call; nothing is cached. Returns `None` unless the
    /// machine uses the pulled model.
    pub fn current_output(&self) -> Option<O> {
        match &self.output {
            OutputModel::Pulled(output) => Some(output(&self.current)),
            OutputModel::None | OutputModel::Feedback(_) => None,
        }
    }

    /// Feed one input to the machine and return the settled state.
    ///
    /// Applies δ once, then any follow-up inputs the feedback model produces
    /// (up to [`MAX_FEEDBACK_DEPTH`]), and only then notifies observers: once
    /// per applied transition, in the order the transitions happened.
    pub fn step(&mut self, input: I) -> &S {
        self.diagnostics.steps += 1;

        if self.delta.is_none() {
            trace!(?input, "step ignored, no transition function");
            return &self.current;
        }

        self.advance(input, 0);

        let mut settled = std::mem::take(&mut self.settled);
        for (previous, next) in &settled {
            self.observers.notify_all(previous, next);
        }
        settled.clear();
        self.settled = settled;

        &self.current
    }

    fn advance(&mut self, input: I, depth: usize) {
        let Some(delta) = self.delta.as_ref() else {
            return;
        };

        let previous = self.current.clone();
        self.current = delta(&previous, &input);
        self.diagnostics.transitions += 1;
        trace!(
            from = previous.name(),
            to = self.current.name(),
            ?input,
            depth,
            "transition applied"
        );

        let follow_up = match &mut self.output {
            OutputModel::Feedback(output) => Some(output(&previous, &self.current)),
            OutputModel::None | OutputModel::Pulled(_) => None,
        };
        self.settled.push((previous, self.current.clone()));

        let Some(follow_up) = follow_up.filter(|i| !i.is_none()) else {
            return;
        };

        if depth < MAX_FEEDBACK_DEPTH {
            self.advance(follow_up, depth + 1);
        } else {
            self.diagnostics.discarded_follow_ups += 1;
            debug!(
                input = ?follow_up,
                depth,
                state = self.current.name(),
                "follow-up input discarded at feedback depth ceiling"
            );
        }
    }

    /// Register an observer, notified after every transition.
    pub fn add_observer<F>(&mut self, observer: F) -> Result<ObserverId, ObserverError>
    where
        F: Fn(&S, &S) + 'static,
    {
        self.observers.add(Observer::new(observer))
    }

    pub(crate) fn register(&mut self, observer: Observer<S>) -> Result<ObserverId, ObserverError> {
        self.observers.add(observer)
    }

    /// Unregister an observer; the rest keep their relative order.
    pub fn remove_observer(&mut self, id: ObserverId) -> Result<(), ObserverError> {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub const fn observer_capacity(&self) -> usize {
        N
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }
}

impl<S: State, I: Input, O, const N: usize> fmt::Debug for Machine<S, I, O, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("has_transition", &self.delta.is_some())
            .field("output", &self.output)
            .field("observers", &self.observers)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
