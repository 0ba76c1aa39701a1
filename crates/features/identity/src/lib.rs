//! # Identity
//!
//! A thin registration/login facade over a [`CredentialStore`].
//!
//! Passwords are salted and hashed (`sha2`) before storage; `login` is a
//! pure yes/no check that never errors — a missing user and a wrong password
//! are indistinguishable to the caller.

mod error;
mod store;

pub use error::IdentityError;
pub use store::{AccountRecord, CredentialStore, MemoryCredentials};

use haven_domain::AccountKind;
use haven_kernel::safe_nanoid;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, info};

/// Registration and login service.
#[derive(Debug, Clone)]
pub struct Accounts {
    store: Arc<dyn CredentialStore>,
}

impl Accounts {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Accounts over an in-process [`MemoryCredentials`] store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCredentials::new()))
    }

    /// Registers a new account and returns its generated id.
    ///
    /// # Errors
    /// [`IdentityError::Validation`] for an empty username or password,
    /// [`IdentityError::UsernameTaken`] for a duplicate username.
    pub fn register(
        &self,
        kind: AccountKind,
        name: &str,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<String, IdentityError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(IdentityError::Validation { message: "username must not be empty".into() });
        }
        if password.is_empty() {
            return Err(IdentityError::Validation { message: "password must not be empty".into() });
        }

        let id = safe_nanoid!();
        let salt = safe_nanoid!(16);
        let record = AccountRecord {
            id: id.clone(),
            kind,
            name: name.to_owned(),
            username: username.to_owned(),
            email: email.to_owned(),
            digest: digest(&salt, password),
            salt,
        };

        if !self.store.insert(record) {
            return Err(IdentityError::UsernameTaken { username: username.to_owned() });
        }

        info!(%kind, username, "Account registered");
        Ok(id)
    }

    /// True iff the username exists and the password matches its digest.
    #[must_use]
    pub fn login(&self, username: &str, password: &str) -> bool {
        let Some(record) = self.store.find(username.trim()) else {
            debug!(username, "Login failed: unknown username");
            return false;
        };
        digest(&record.salt, password) == record.digest
    }
}

/// Hex-encoded SHA-256 over salt and password.
fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
