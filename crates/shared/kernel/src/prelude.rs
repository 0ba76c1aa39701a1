//! Convenience re-exports for downstream slices.

pub use crate::config::{ConfigError, load_config};
pub use crate::safe_nanoid;
pub use haven_domain::config::AppConfig;
pub use haven_domain::{
    AccountKind, AgeBucket, Capacity, GenderBucket, SearchFilter, Shelter, ShelterKey, UserId,
};
