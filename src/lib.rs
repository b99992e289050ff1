//! Moore: a deterministic reactive state machine engine
//!
//! Moore drives a Moore machine M = (Q, Σ, δ, λ, q₀) from a single control
//! loop. The caller supplies a pure transition function δ and an initial
//! state; the engine stores the state, applies δ to each input it is given,
//! runs the chosen output strategy and notifies passive observers. There is
//! no scheduler and no clock: time, when it matters, arrives as data inside
//! an input or a state.
//!
//! # Core Concepts
//!
//! - **State / Input**: caller types implementing the `State` and `Input` traits
//! - **Transition function**: pure `Fn(&State, &Input) -> State`
//! - **Output models**: pulled (`Fn(&State) -> Output`, evaluated on demand) or
//!   feedback (`FnMut(&State, &State) -> Input`, stepped back into the machine
//!   up to a fixed depth)
//! - **Observers**: callbacks notified with `(previous, next)` after each step
//!
//! # Example
//!
//! ```rust
//! use moore::engine::Machine;
//! use moore::{input_enum, state_enum};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Led { Off, On }
//! }
//!
//! input_enum! {
//!     enum Event { Nothing, Tick }
//!     none: Nothing
//! }
//!
//! fn blink(led: &Led, event: &Event) -> Led {
//!     match (led, event) {
//!         (Led::Off, Event::Tick) => Led::On,
//!         (Led::On, Event::Tick) => Led::Off,
//!         (led, Event::Nothing) => *led,
//!     }
//! }
//!
//! let mut machine: Machine<Led, Event> = Machine::new(blink, Led::Off);
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&changes);
//! machine
//!     .add_observer(move |previous, next| {
//!         if previous != next {
//!             seen.set(seen.get() + 1);
//!         }
//!     })
//!     .unwrap();
//!
//! machine.step(Event::Tick);
//! machine.step(Event::Nothing);
//! machine.step(Event::Tick);
//!
//! assert_eq!(machine.state(), &Led::Off);
//! assert_eq!(changes.get(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder};
pub use self::core::{Input, Observer, State, StateHistory, StateTransition};
pub use self::engine::{Diagnostics, Machine, ObserverError, ObserverId, OutputModel, MAX_FEEDBACK_DEPTH};
