//! # Reservation Gate
//!
//! Governs the at-most-one-reservation-per-user rule and per-shelter
//! availability checks before a reservation may proceed.
//!
//! The directory snapshot is immutable, so the gate tracks the conceptual
//! decrement of availability as per-shelter *hold* counts and subtracts them
//! when checking for space. All mutable state lives behind one lock, making
//! `reserve` an atomic check-and-set: of any number of concurrent attempts
//! for the same user, at most one succeeds.
//!
//! State machine per user: `NONE -> RESERVED` on a successful [`ReservationGate::reserve`],
//! `RESERVED -> NONE` on [`ReservationGate::release`]. Reserving while
//! `RESERVED` always fails with [`ReservationError::AlreadyReserved`],
//! regardless of shelter state.

mod error;
mod store;

pub use error::ReservationError;
pub use store::{MemoryStore, ReservationStore, StoreError};

use chrono::{DateTime, Utc};
use fxhash::FxHashMap;
use haven_directory::Directory;
use haven_domain::{Shelter, ShelterKey, UserId};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// A successfully placed reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub user: UserId,
    pub shelter: ShelterKey,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct GateState {
    /// Active reservation per user; a user is `RESERVED` iff present here.
    active: FxHashMap<UserId, ShelterKey>,
    /// Beds held through this gate per shelter, subtracted from availability.
    holds: FxHashMap<ShelterKey, u32>,
}

/// Serialized access to reservation state over a directory snapshot.
#[derive(Debug)]
pub struct ReservationGate {
    directory: Directory,
    store: Arc<dyn ReservationStore>,
    state: Mutex<GateState>,
}

impl ReservationGate {
    pub fn new(directory: Directory, store: Arc<dyn ReservationStore>) -> Self {
        Self { directory, store, state: Mutex::new(GateState::default()) }
    }

    /// Gate over an in-process [`MemoryStore`].
    #[must_use]
    pub fn in_memory(directory: Directory) -> Self {
        Self::new(directory, Arc::new(MemoryStore::new()))
    }

    /// True iff the user currently holds no active reservation.
    #[must_use]
    pub fn can_reserve(&self, user: &UserId) -> bool {
        !self.state.lock().active.contains_key(user)
    }

    /// The shelter the user has reserved, if any.
    #[must_use]
    pub fn active(&self, user: &UserId) -> Option<ShelterKey> {
        self.state.lock().active.get(user).copied()
    }

    /// True iff at least one capacity bucket has a known free bed after
    /// subtracting holds placed through this gate. Unknown availability
    /// never counts.
    #[must_use]
    pub fn has_availability(&self, shelter: &Shelter) -> bool {
        let held = self.state.lock().holds.get(&shelter.key).copied().unwrap_or(0);
        free_beds(shelter) > u64::from(held)
    }

    /// Places a reservation of `key` for `user`.
    ///
    /// # Errors
    /// [`ReservationError::NotFound`] when the key resolves to no shelter,
    /// [`ReservationError::AlreadyReserved`] when the user holds one already,
    /// [`ReservationError::NoSpaceAvailable`] when no bucket has a known free
    /// bed, and [`ReservationError::Store`] when the persistence collaborator
    /// rejects the commit.
    pub fn reserve(&self, user: &UserId, key: ShelterKey) -> Result<Reservation, ReservationError> {
        let shelter =
            self.directory.get(key).ok_or(ReservationError::NotFound { key })?;

        let mut state = self.state.lock();

        if state.active.contains_key(user) {
            return Err(ReservationError::AlreadyReserved { user: user.clone() });
        }

        let held = state.holds.get(&key).copied().unwrap_or(0);
        if free_beds(&shelter) <= u64::from(held) {
            return Err(ReservationError::NoSpaceAvailable { key });
        }

        self.store
            .commit(user, key)
            .map_err(|e| ReservationError::Store { message: e.message })?;

        state.active.insert(user.clone(), key);
        *state.holds.entry(key).or_default() += 1;

        info!(user = %user, shelter = %key, "Reservation placed");
        Ok(Reservation { user: user.clone(), shelter: key, reserved_at: Utc::now() })
    }

    /// Clears the user's reservation and returns the released shelter key.
    /// Idempotent: releasing with no active reservation returns `None`.
    pub fn release(&self, user: &UserId) -> Option<ShelterKey> {
        let released = {
            let mut state = self.state.lock();
            let key = state.active.remove(user)?;
            if let Some(held) = state.holds.get_mut(&key) {
                *held = held.saturating_sub(1);
            }
            key
        };

        self.store.release(user);
        debug!(user = %user, shelter = %released, "Reservation released");
        Some(released)
    }
}

/// Total known free beds across all capacity buckets.
fn free_beds(shelter: &Shelter) -> u64 {
    shelter.capacities.iter().filter_map(|cap| cap.available).map(u64::from).sum()
}
