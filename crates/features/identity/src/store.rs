//! Credential persistence seam.

use fxhash::FxHashMap;
use haven_domain::AccountKind;
use parking_lot::RwLock;
use std::fmt::Debug;

/// A stored account: identity plus a salted password digest.
/// The plaintext password is never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: String,
    pub kind: AccountKind,
    pub name: String,
    pub username: String,
    pub email: String,
    pub salt: String,
    pub digest: String,
}

/// External persistence collaborator for account credentials.
pub trait CredentialStore: Debug + Send + Sync {
    /// Inserts a new record; returns `false` when the username is taken.
    fn insert(&self, record: AccountRecord) -> bool;

    /// Finds a record by exact username.
    fn find(&self, username: &str) -> Option<AccountRecord>;
}

/// In-process [`CredentialStore`] backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    accounts: RwLock<FxHashMap<String, AccountRecord>>,
}

impl MemoryCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }
}

impl CredentialStore for MemoryCredentials {
    fn insert(&self, record: AccountRecord) -> bool {
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&record.username) {
            return false;
        }
        accounts.insert(record.username.clone(), record);
        true
    }

    fn find(&self, username: &str) -> Option<AccountRecord> {
        self.accounts.read().get(username).cloned()
    }
}
