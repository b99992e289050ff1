//! Passive observers of state transitions.
//!
//! Observers are callbacks that see every transition after it has settled.
//! They cannot influence the transition: they receive the previous and next
//! states by reference and return nothing.

use super::state::State;

/// Callback notified with `(previous, next)` after a transition.
///
/// The callback is `Fn`, so it cannot mutate captured values directly.
/// Observers that need to accumulate something (a counter, a log) do it
/// through interior mutability such as `Cell` or `RefCell`.
///
/// # Example
///
/// ```rust
/// use moore::core::{Observer, State};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl State for Door {}
///
/// let openings = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&openings);
/// let observer = Observer::new(move |previous: &Door, next: &Door| {
///     if previous != next && *next == Door::Open {
///         seen.set(seen.get() + 1);
///     }
/// });
///
/// observer.notify(&Door::Closed, &Door::Open);
/// observer.notify(&Door::Open, &Door::Open);
/// assert_eq!(openings.get(), 1);
/// ```
pub struct Observer<S: State> {
    callback: Box<dyn Fn(&S, &S)>,
}

impl<S: State> Observer<S> {
    /// Wrap a callback as an observer.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&S, &S) + 'static,
    {
        Observer {
            callback: Box::new(callback),
        }
    }

    /// Deliver one transition to the callback.
    pub fn notify(&self, previous: &S, next: &S) {
        (self.callback)(previous, next)
    }
}

impl<S: State> std::fmt::Debug for Observer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
