//! Input alphabet trait.

use std::fmt::Debug;

/// Trait for input symbols (the alphabet Σ).
///
/// Every alphabet has a distinguished "no input" symbol, [`Input::NONE`].
/// Transition functions are expected to treat it as the identity, and the
/// engine treats a follow-up input equal to `NONE` as "nothing to feed back".
///
/// # Example
///
/// ```rust
/// use moore::core::Input;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Event {
///     Nothing,
///     Tick,
/// }
///
/// impl Input for Event {
///     const NONE: Self = Event::Nothing;
/// }
///
/// assert!(Event::Nothing.is_none());
/// assert!(!Event::Tick.is_none());
/// ```
pub trait Input: Clone + PartialEq + Debug {
    /// The "no input" symbol.
    const NONE: Self;

    /// Check whether this symbol is the "no input" symbol.
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
