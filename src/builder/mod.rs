//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder, a transition helper and macros for
//! declaring states and inputs with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{Input, State};

/// Wrap a transition function so that `Input::NONE` leaves the state alone.
///
/// The wrapped function only ever sees real inputs.
///
/// # Example
///
/// ```
/// use moore::builder::ignore_none;
/// use moore::core::Input;
/// use moore::{input_enum, state_enum};
///
/// state_enum! {
///     enum Counter { Zero, One, Many }
/// }
///
/// input_enum! {
///     enum Pulse { Nothing, Beat }
///     none: Nothing
/// }
///
/// // Counts every input, so on its own it would not treat `Nothing` as a no-op.
/// let count = ignore_none(|counter: &Counter, _: &Pulse| match counter {
///     Counter::Zero => Counter::One,
///     _ => Counter::Many,
/// });
///
/// assert_eq!(count(&Counter::Zero, &Pulse::NONE), Counter::Zero);
/// assert_eq!(count(&Counter::Zero, &Pulse::Beat), Counter::One);
/// ```
pub fn ignore_none<S, I, F>(transition: F) -> impl Fn(&S, &I) -> S + 'static
where
    S: State + 'static,
    I: Input + 'static,
    F: Fn(&S, &I) -> S + 'static,
{
    move |state: &S, input: &I| {
        if input.is_none() {
            state.clone()
        } else {
            transition(state, input)
        }
    }
}
