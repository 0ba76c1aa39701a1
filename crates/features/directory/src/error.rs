use haven_domain::ShelterKey;
use thiserror::Error;

/// A specialized [`DirectoryError`] enum of this crate.
///
/// Filtering itself never errors; only snapshot construction can fail, when
/// the identity invariant (unique shelter keys) is violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Two shelters in the source collection share the same key.
    #[error("duplicate shelter key {key} in directory source")]
    DuplicateKey { key: ShelterKey },
}
