use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`IdentityError`] enum of this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Registration input failed validation (empty username/password, ...).
    #[error("identity validation error: {message}")]
    Validation { message: Cow<'static, str> },

    /// The requested username is already registered.
    #[error("username '{username}' is already taken")]
    UsernameTaken { username: String },
}
