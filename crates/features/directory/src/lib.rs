//! # Shelter Directory
//!
//! An immutable, cheaply-cloneable snapshot of the known shelters with
//! predicate-based lookups and set intersection across active criteria.
//!
//! Each criterion computes its candidate subset against the *full* directory
//! (never against a previous result) and the subsets are intersected, so the
//! three filters are commutative and order-independent. An inactive criterion
//! contributes the full key set and the intersection is a no-op for that
//! dimension.
//!
//! Lookups never fail: unmatched input yields an empty set. Every query
//! returns a fresh owned set, so callers cannot alias directory state.
//!
//! ## Example
//!
//! ```rust
//! use haven_directory::Directory;
//! use haven_domain::{Capacity, SearchFilter, Shelter, ShelterKey};
//!
//! # fn main() -> Result<(), haven_directory::DirectoryError> {
//! let directory = Directory::from_shelters(vec![Shelter {
//!     key: ShelterKey(1),
//!     name: "Main St".to_owned(),
//!     notes: String::new(),
//!     address: String::new(),
//!     restrictions: String::new(),
//!     phone: String::new(),
//!     capacities: vec![Capacity::new("Men", Some(20), Some(5))],
//! }])?;
//!
//! let hits = directory.search(&SearchFilter::default().with_name("main"));
//! assert!(hits.contains(&ShelterKey(1)));
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;

pub use engine::{Directory, intersect};
pub use error::DirectoryError;
