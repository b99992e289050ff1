//! Step counters.

use serde::{Deserialize, Serialize};

/// Counters a machine keeps about its own stepping.
///
/// These never influence stepping; they exist so tests and callers can see
/// how often self-feeding hit the depth ceiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// External `step` calls, including calls on a machine without a
    /// transition function
    pub steps: u64,
    /// Transition function applications, follow-ups included
    pub transitions: u64,
    /// Follow-up inputs dropped at the feedback depth ceiling
    pub discarded_follow_ups: u64,
}

impl Diagnostics {
    /// Transitions that came from follow-up inputs rather than `step` calls.
    pub fn follow_ups(&self) -> u64 {
        self.transitions.saturating_sub(self.steps)
    }
}
