//! Facade crate for `HavenHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `haven` with the desired feature flags (`directory`/`reservation`/`identity`).
//! - Load a snapshot via `haven::features::loader`, then search and reserve through
//!   `haven::features::directory` and `haven::features::reservation`.

pub use haven_domain as domain;
pub use haven_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "directory")]
    pub use haven_directory as directory;
    #[cfg(feature = "identity")]
    pub use haven_identity as identity;
    #[cfg(feature = "directory")]
    pub use haven_loader as loader;
    #[cfg(feature = "reservation")]
    pub use haven_reservation as reservation;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "directory")]
        "directory",
        #[cfg(feature = "reservation")]
        "reservation",
        #[cfg(feature = "identity")]
        "identity",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn default_features_are_registered() {
        assert!(features::is_enabled("directory"));
        assert!(features::is_enabled("reservation"));
        assert!(features::is_enabled("identity"));
        assert!(!features::is_enabled("telemetry"));
    }
}
