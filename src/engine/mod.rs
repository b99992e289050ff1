//! The reactive state machine engine.
//!
//! This module is the driver around the caller's pure functions: it owns
//! the current state, applies δ, runs the chosen output strategy and tells
//! observers what happened.
//!
//! # Key Concepts
//!
//! - **Machine**: stores the state and exposes `step` as the only mutator
//! - **Output models**: pulled (`λ(state)` on demand) or feedback
//!   (`λ(previous, next)` returns a follow-up input)
//! - **Observers**: a fixed-capacity registry notified after each step settles
//!
//! Stepping is synchronous and single-threaded. Nothing here reads a clock,
//! spawns work or blocks.

mod diagnostics;
mod error;
mod machine;
mod output;
mod registry;

pub use diagnostics::Diagnostics;
pub use error::ObserverError;
pub use machine::{Machine, DEFAULT_OBSERVER_CAPACITY, MAX_FEEDBACK_DEPTH};
pub use output::{FeedbackFn, OutputModel, PulledFn, TransitionFn};
pub use registry::{ObserverId, ObserverRegistry};
