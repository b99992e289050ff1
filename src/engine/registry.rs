//! Fixed-capacity observer registry.

use crate::core::{Observer, State};
use crate::engine::error::ObserverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Handle returned when an observer is registered; used to remove it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Slot<S: State> {
    id: ObserverId,
    observer: Observer<S>,
}

/// Observers in registration order, stored in an array of `N` slots.
///
/// Live observers always occupy `slots[..len]`. Removing one shifts the
/// later observers down so notification order stays registration order.
/// The registry never grows past `N`.
pub struct ObserverRegistry<S: State, const N: usize> {
    slots: [Option<Slot<S>>; N],
    len: usize,
    next_id: u64,
}

impl<S: State, const N: usize> ObserverRegistry<S, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
            next_id: 0,
        }
    }

    /// Register an observer at the end of the notification order.
    pub fn add(&mut self, observer: Observer<S>) -> Result<ObserverId, ObserverError> {
        if self.len >= N {
            warn!(capacity = N, "observer registry full, registration refused");
            return Err(ObserverError::RegistryFull { capacity: N });
        }

        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.slots[self.len] = Some(Slot { id, observer });
        self.len += 1;
        debug!(%id, count = self.len, "observer registered");
        Ok(id)
    }

    /// Remove an observer, keeping the remaining ones in order.
    pub fn remove(&mut self, id: ObserverId) -> Result<(), ObserverError> {
        let position = self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| s.id == id))
            .ok_or(ObserverError::UnknownObserver(id))?;

        // Rotate the removed slot to the end of the live range, then drop it.
        self.slots[position..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = None;
        debug!(%id, count = self.len, "observer removed");
        Ok(())
    }

    /// Notify every observer, in registration order.
    pub fn notify_all(&self, previous: &S, next: &S) {
        for slot in self.slots[..self.len].iter().flatten() {
            slot.observer.notify(previous, next);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Registered handles in notification order.
    pub fn ids(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.slots[..self.len].iter().flatten().map(|slot| slot.id)
    }
}

impl<S: State, const N: usize> Default for ObserverRegistry<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, const N: usize> fmt::Debug for ObserverRegistry<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.len)
            .field("capacity", &N)
            .finish()
    }
}
