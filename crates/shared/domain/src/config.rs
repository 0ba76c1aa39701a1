use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub directory: DirectoryConfig,
    pub logging: LoggingConfig,
}

/// Where the shelter directory is loaded from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Path to the shelter records file consumed by the loader.
    pub source: PathBuf,
}

/// Logging knobs for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    /// Directory for rolling log files; `None` disables file logging.
    pub path: Option<PathBuf>,
    pub level: String,
}

// --- Default ---

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { source: PathBuf::from("shelters.json") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, path: None, level: "info".to_owned() }
    }
}
