//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Input, Observer, State};
use crate::engine::{Machine, OutputModel, TransitionFn, DEFAULT_OBSERVER_CAPACITY};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing machines with a fluent API.
///
/// Unlike `Machine::new`, the builder can register observers up front and
/// checks the whole configuration at once in `build`, reporting every
/// problem it finds rather than the first.
///
/// # Example
///
/// ```rust
/// use moore::builder::{BuildError, MachineBuilder};
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
/// let mut machine = MachineBuilder::<Lamp, Event>::new()
///     .initial(Lamp::Off)
///     .transition(|lamp, event| match (lamp, event) {
///         (Lamp::Off, Event::Toggle) => Lamp::On,
///         (Lamp::On, Event::Toggle) => Lamp::Off,
///         (lamp, Event::Nothing) => *lamp,
///     })
///     .build()?;
///
/// machine.step(Event::Toggle);
/// assert_eq!(machine.state(), &Lamp::On);
/// # Ok::<(), BuildError>(())
/// ```
pub struct MachineBuilder<S: State, I: Input, O = (), const N: usize = { DEFAULT_OBSERVER_CAPACITY }> {
    initial: Option<S>,
    transition: Option<TransitionFn<S, I>>,
    output: OutputModel<S, I, O>,
    observers: Vec<Observer<S>>,
}

impl<S: State, I: Input, O, const N: usize> MachineBuilder<S, I, O, N> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transition: None,
            output: OutputModel::None,
            observers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition function δ.
    ///
    /// Optional: a machine built without one ignores every `step`.
    pub fn transition<F>(mut self, transition: F) -> Self
    where
        F: Fn(&S, &I) -> S + 'static,
    {
        self.transition = Some(Box::new(transition));
        self
    }

    /// Use the pulled output model.
    pub fn pulled_output<F>(mut self, output: F) -> Self
    where
        F: Fn(&S) -> O + 'static,
    {
        self.output = OutputModel::pulled(output);
        self
    }

    /// Use the self-feeding output model.
    pub fn feedback<F>(mut self, output: F) -> Self
    where
        F: FnMut(&S, &S) -> I + 'static,
    {
        self.output = OutputModel::feedback(output);
        self
    }

    /// Register an observer once the machine is built.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&S, &S) + 'static,
    {
        self.observers.push(Observer::new(observer));
        self
    }

    /// Check the configuration, accumulating every violation.
    fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let has_initial: Validation<(), NonEmptyVec<BuildError>> = if self.initial.is_some() {
            Validation::success(())
        } else {
            Validation::fail(BuildError::MissingInitialState)
        };

        let observers_fit: Validation<(), NonEmptyVec<BuildError>> = if self.observers.len() <= N {
            Validation::success(())
        } else {
            Validation::fail(BuildError::TooManyObservers {
                capacity: N,
                requested: self.observers.len(),
            })
        };

        Validation::all_vec(vec![has_initial, observers_fit]).map(|_| ())
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the observers
    /// do not fit the registry.
    pub fn build(self) -> Result<Machine<S, I, O, N>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            return Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                BuildError::Invalid(errors)
            });
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut machine = Machine::from_parts(self.transition, self.output, initial);
        for observer in self.observers {
            machine.register(observer)?;
        }

        Ok(machine)
    }
}

impl<S: State, I: Input, O, const N: usize> Default for MachineBuilder<S, I, O, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Mode {
        Idle,
        Armed,
        Firing,
    }

    impl State for Mode {}

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Command {
        Nothing,
        Arm,
        Fire,
        Reset,
    }

    impl Input for Command {
        const NONE: Self = Command::Nothing;
    }

    fn next_mode(mode: &Mode, command: &Command) -> Mode {
        match (mode, command) {
            (Mode::Idle, Command::Arm) => Mode::Armed,
            (Mode::Armed, Command::Fire) => Mode::Firing,
            (_, Command::Reset) => Mode::Idle,
            (mode, _) => *mode,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<Mode, Command>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_reports_all_problems_at_once() {
        let result = MachineBuilder::<Mode, Command, (), 1>::new()
            .observer(|_, _| {})
            .observer(|_, _| {})
            .build();

        match result {
            Err(BuildError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(&BuildError::MissingInitialState));
                assert!(errors.contains(&BuildError::TooManyObservers {
                    capacity: 1,
                    requested: 2
                }));
            }
            other => panic!("Expected accumulated errors, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_too_many_observers() {
        let result = MachineBuilder::<Mode, Command, (), 1>::new()
            .initial(Mode::Idle)
            .observer(|_, _| {})
            .observer(|_, _| {})
            .build();

        assert!(matches!(
            result,
            Err(BuildError::TooManyObservers {
                capacity: 1,
                requested: 2
            })
        ));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let notified = Rc::new(Cell::new(0));
        let seen = Rc::clone(&notified);

        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial(Mode::Idle)
            .transition(next_mode)
            .observer(move |_, _| seen.set(seen.get() + 1))
            .build()
            .unwrap();

        machine.step(Command::Arm);
        machine.step(Command::Fire);

        assert_eq!(machine.state(), &Mode::Firing);
        assert_eq!(machine.observer_count(), 1);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn builder_wires_feedback() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial(Mode::Idle)
            .transition(next_mode)
            .feedback(|_, next| match next {
                Mode::Firing => Command::Reset,
                _ => Command::Nothing,
            })
            .build()
            .unwrap();

        machine.step(Command::Arm);
        machine.step(Command::Fire);

        assert_eq!(machine.state(), &Mode::Idle);
        assert_eq!(machine.diagnostics().transitions, 3);
    }

    #[test]
    fn builder_wires_pulled_output() {
        let mut machine = MachineBuilder::<Mode, Command, bool>::new()
            .initial(Mode::Idle)
            .transition(next_mode)
            .pulled_output(|mode| *mode == Mode::Armed)
            .build()
            .unwrap();

        assert_eq!(machine.current_output(), Some(false));
        machine.step(Command::Arm);
        assert_eq!(machine.current_output(), Some(true));
    }

    #[test]
    fn builder_without_transition_ignores_steps() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial(Mode::Armed)
            .build()
            .unwrap();

        machine.step(Command::Reset);

        assert_eq!(machine.state(), &Mode::Armed);
    }
}
