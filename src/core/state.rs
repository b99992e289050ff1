//! Core State trait for machine states.
//!
//! A state is the complete configuration of the controlled system. The engine
//! never mutates a state in place; it only replaces it with the value
//! returned by the transition function.

use std::fmt::Debug;

/// Trait for machine states (the set Q).
///
/// States are plain values: cloned when the engine captures the previous
/// state, compared by observers that only care about actual changes, and
/// printed in diagnostics. They should be closed, finite-domain types with
/// no non-deterministic fields.
///
/// # Required Traits
///
/// - `Clone`: the engine keeps a copy of the previous state for each step
/// - `PartialEq`: observers and tests compare states
/// - `Debug`: states show up in logs and assertion messages
///
/// # Example
///
/// ```rust
/// use moore::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// ```
pub trait State: Clone + PartialEq + Debug {
    /// Get the state's name for display/logging.
    ///
    /// Default implementation returns the type name, which suits struct
    /// states whose interesting content lives in their fields.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestState {
        Idle,
        Heating,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Heating => "Heating",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        ticks: u32,
    }

    impl State for Counter {}

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Heating.name(), "Heating");
    }

    #[test]
    fn default_name_is_type_name() {
        let state = Counter { ticks: 3 };
        assert!(state.name().ends_with("Counter"));
    }

    #[test]
    fn state_is_comparable() {
        let a = Counter { ticks: 1 };
        let b = a.clone();
        let c = Counter { ticks: 2 };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
