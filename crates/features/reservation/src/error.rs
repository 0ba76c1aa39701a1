use haven_domain::{ShelterKey, UserId};
use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`ReservationError`] enum of this crate.
///
/// All taxonomy members are distinguishable values so callers can produce
/// precise user-facing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The user already holds an active reservation; at most one is allowed.
    #[error("user {user} already holds an active reservation")]
    AlreadyReserved { user: UserId },

    /// No capacity bucket of the target shelter has a known free bed.
    #[error("shelter {key} has no space available")]
    NoSpaceAvailable { key: ShelterKey },

    /// Lookup by key yielded no shelter; a caller precondition violation.
    #[error("no shelter with key {key} in the directory")]
    NotFound { key: ShelterKey },

    /// The persistence collaborator rejected the operation.
    #[error("reservation store error: {message}")]
    Store { message: Cow<'static, str> },
}
