//! Core machine types.
//!
//! This module contains the caller-facing vocabulary of the engine:
//! - States and input alphabets via the `State` and `Input` traits
//! - Observer callbacks
//! - Ordered transition history
//!
//! Nothing in this module performs I/O or reads a clock.

mod history;
mod input;
mod observer;
mod state;

pub use history::{StateHistory, StateTransition};
pub use input::Input;
pub use observer::Observer;
pub use state::State;
