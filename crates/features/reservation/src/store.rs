//! Reservation persistence seam.
//!
//! The gate owns the in-memory state machine; durable persistence is an
//! external collaborator behind [`ReservationStore`]. The bundled
//! [`MemoryStore`] keeps everything in-process for tests and the shell.

use fxhash::FxHashMap;
use haven_domain::{ShelterKey, UserId};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Failure reported by a persistence backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("store rejected the operation: {message}")]
pub struct StoreError {
    pub message: Cow<'static, str>,
}

impl StoreError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }
}

/// External persistence collaborator for committed reservations.
pub trait ReservationStore: Debug + Send + Sync {
    /// Durably records a reservation of `key` for `user`.
    fn commit(&self, user: &UserId, key: ShelterKey) -> Result<(), StoreError>;

    /// Releases whatever reservation `user` holds; a no-op when none exists.
    fn release(&self, user: &UserId);
}

/// In-process [`ReservationStore`] backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: Mutex<FxHashMap<UserId, ShelterKey>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shelter currently committed for `user`, if any.
    #[must_use]
    pub fn committed(&self, user: &UserId) -> Option<ShelterKey> {
        self.committed.lock().get(user).copied()
    }
}

impl ReservationStore for MemoryStore {
    fn commit(&self, user: &UserId, key: ShelterKey) -> Result<(), StoreError> {
        self.committed.lock().insert(user.clone(), key);
        Ok(())
    }

    fn release(&self, user: &UserId) {
        self.committed.lock().remove(user);
    }
}
