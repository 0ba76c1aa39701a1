//! Shelter sources: the external collaborators that supply the full shelter
//! collection. Encodings are the source's concern, not the directory's.

use crate::error::{LoadError, LoadErrorExt};
use haven_domain::Shelter;
use std::fmt::Debug;
use std::future::Future;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Supplies the full shelter collection, once, at startup.
pub trait ShelterSource: Debug + Send + Sync {
    /// Loads every shelter record the source knows about.
    fn load_all(&self) -> impl Future<Output = Result<Vec<Shelter>, LoadError>> + Send;
}

/// A JSON file containing an array of shelter records.
///
/// Legacy `-1` "unknown" counters in the records deserialize to `None`
/// (see the domain's `Capacity`).
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShelterSource for JsonSource {
    async fn load_all(&self) -> Result<Vec<Shelter>, LoadError> {
        let raw = fs::read(&self.path)
            .await
            .context(format!("Reading {}", self.path.display()))?;

        let shelters: Vec<Shelter> = serde_json::from_slice(&raw)
            .context(format!("Decoding {}", self.path.display()))?;

        debug!(path = %self.path.display(), shelters = shelters.len(), "Shelter records loaded");
        Ok(shelters)
    }
}

/// A fixed in-memory collection; the simplest source for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    shelters: Vec<Shelter>,
}

impl StaticSource {
    #[must_use]
    pub fn new(shelters: Vec<Shelter>) -> Self {
        Self { shelters }
    }
}

impl ShelterSource for StaticSource {
    async fn load_all(&self) -> Result<Vec<Shelter>, LoadError> {
        Ok(self.shelters.clone())
    }
}
