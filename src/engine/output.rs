//! Output strategies.

use std::fmt;

/// Pure transition function δ: Q × Σ → Q.
pub type TransitionFn<S, I> = Box<dyn Fn(&S, &I) -> S>;

/// Pulled output function λ: Q → Γ.
pub type PulledFn<S, O> = Box<dyn Fn(&S) -> O>;

/// Self-feeding output function λ: Q × Q → Σ.
///
/// Receives `(previous, next)` and returns a follow-up input, or
/// `Input::NONE` when there is nothing to feed back. This is the one place
/// where the engine allows side effects, hence `FnMut`.
pub type FeedbackFn<S, I> = Box<dyn FnMut(&S, &S) -> I>;

/// How a machine produces output.
///
/// - `None`: the machine only tracks state.
/// - `Pulled`: the caller asks for `λ(state)` whenever it wants, via
///   `Machine::current_output`. Nothing is computed during `step`.
/// - `Feedback`: `λ(previous, next)` runs after every transition and its
///   result, unless it is `Input::NONE`, is stepped back into the machine.
pub enum OutputModel<S, I, O> {
    None,
    Pulled(PulledFn<S, O>),
    Feedback(FeedbackFn<S, I>),
}

impl<S, I, O> OutputModel<S, I, O> {
    pub fn pulled<F>(output: F) -> Self
    where
        F: Fn(&S) -> O + 'static,
    {
        Self::Pulled(Box::new(output))
    }

    pub fn feedback<F>(output: F) -> Self
    where
        F: FnMut(&S, &S) -> I + 'static,
    {
        Self::Feedback(Box::new(output))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pulled(_) => "pulled",
            Self::Feedback(_) => "feedback",
        }
    }
}

impl<S, I, O> Default for OutputModel<S, I, O> {
    fn default() -> Self {
        Self::None
    }
}

impl<S, I, O> fmt::Debug for OutputModel<S, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputModel::{}", self.kind())
    }
}
