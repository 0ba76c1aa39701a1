//! # Directory Loader
//!
//! Populates the shelter directory asynchronously, once per session, and
//! publishes the finished snapshot through a one-shot notify: readers await
//! the publish instead of polling, and never observe partial population.
//!
//! ## Example
//!
//! ```rust
//! use haven_loader::{DirectoryLoader, StaticSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), haven_loader::LoadError> {
//!     let mut handle = DirectoryLoader::spawn(StaticSource::default());
//!     let directory = handle.ready().await?;
//!     assert!(directory.is_empty());
//!     Ok(())
//! }
//! ```

mod error;
mod source;

pub use error::{LoadError, LoadErrorExt};
pub use source::{JsonSource, ShelterSource, StaticSource};

use haven_directory::Directory;
use haven_domain::Shelter;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Published state of the one-shot load.
#[derive(Debug, Clone, Default)]
enum LoadState {
    #[default]
    Pending,
    Ready(Directory),
    Failed(String),
}

/// Spawns the one-time load task and hands out awaitable handles.
#[derive(Debug)]
pub struct DirectoryLoader;

impl DirectoryLoader {
    /// Starts loading from `source` on a background task.
    ///
    /// The returned handle observes exactly one publish: either the complete
    /// snapshot or the load failure. Must be called within a tokio runtime.
    pub fn spawn<S>(source: S) -> DirectoryHandle
    where
        S: ShelterSource + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Pending);

        tokio::spawn(async move {
            let state = match load_directory(&source).await {
                Ok(directory) => {
                    info!(shelters = directory.len(), "Directory published");
                    LoadState::Ready(directory)
                },
                Err(err) => {
                    error!(error = %err, "Directory load failed");
                    LoadState::Failed(err.to_string())
                },
            };
            // Receivers may all be gone; nothing to do then.
            let _ = tx.send(state);
        });

        DirectoryHandle { rx }
    }
}

/// Loads, validates, and builds a directory snapshot without spawning.
///
/// Validation applied to the raw records:
/// * duplicate shelter keys fail the load (identity invariant);
/// * a known `available` above a known `beds` is clamped down with a warning
///   (external data is advisory, not authoritative).
///
/// # Errors
/// Returns the source's [`LoadError`], or [`LoadError::Validation`] when the
/// collection violates directory invariants.
pub async fn load_directory<S: ShelterSource>(source: &S) -> Result<Directory, LoadError> {
    let mut shelters = source.load_all().await?;

    for shelter in &mut shelters {
        clamp_availability(shelter);
    }

    Directory::from_shelters(shelters).map_err(|err| LoadError::Validation {
        message: err.to_string().into(),
        context: None,
    })
}

fn clamp_availability(shelter: &mut Shelter) {
    for cap in &mut shelter.capacities {
        if let (Some(beds), Some(available)) = (cap.beds, cap.available) {
            if available > beds {
                warn!(
                    shelter = %shelter.key,
                    category = %cap.category,
                    available,
                    beds,
                    "Available beds exceed capacity; clamping"
                );
                cap.available = Some(beds);
            }
        }
    }
}

/// An awaitable handle onto the one-shot directory publish.
#[derive(Debug, Clone)]
pub struct DirectoryHandle {
    rx: watch::Receiver<LoadState>,
}

impl DirectoryHandle {
    /// Waits for the publish and returns the complete snapshot.
    ///
    /// Resolves immediately once the directory has been published; safe to
    /// call from any number of clones of the handle.
    ///
    /// # Errors
    /// Returns [`LoadError::Failed`] when the load task reported an error or
    /// disappeared before publishing.
    pub async fn ready(&mut self) -> Result<Directory, LoadError> {
        loop {
            let state = self.rx.borrow_and_update().clone();
            match state {
                LoadState::Ready(directory) => return Ok(directory),
                LoadState::Failed(message) => {
                    return Err(LoadError::Failed { message: message.into(), context: None });
                },
                LoadState::Pending => {},
            }

            self.rx.changed().await.map_err(|_| LoadError::Failed {
                message: "load task dropped before publishing".into(),
                context: None,
            })?;
        }
    }

    /// The published snapshot, if the load has already completed.
    #[must_use]
    pub fn try_snapshot(&self) -> Option<Directory> {
        match &*self.rx.borrow() {
            LoadState::Ready(directory) => Some(directory.clone()),
            LoadState::Pending | LoadState::Failed(_) => None,
        }
    }
}
