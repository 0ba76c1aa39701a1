use haven_domain::config::{AppConfig, DirectoryConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let directory = DirectoryConfig::default();
    assert_eq!(directory.source, std::path::PathBuf::from("shelters.json"));

    let logging = LoggingConfig::default();
    assert!(logging.console);
    assert!(logging.path.is_none());
    assert_eq!(logging.level, "info");
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "directory": { "source": "/srv/haven/shelters.json" },
        "logging": { "console": false, "path": "/var/log/haven", "level": "debug" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.directory.source, std::path::PathBuf::from("/srv/haven/shelters.json"));
    assert!(!cfg.logging.console);
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.directory.source, DirectoryConfig::default().source);
    assert_eq!(cfg.logging.level, "info");
}
