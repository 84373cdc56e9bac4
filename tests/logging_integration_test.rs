//! Integration tests for logging initialization

use abs_metadata::config::LoggingConfig;
use abs_metadata::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_rotation_rejected() {
    let config = LoggingConfig {
        local_rotation: "weekly".to_string(),
        ..LoggingConfig::with_directory("/tmp/abs-metadata")
    };
    assert!(config.validate().is_err());
}

// The global subscriber can be installed once per process, so this is the
// only test in this binary that calls `init_logging`.
#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");
    let config = LoggingConfig::with_directory(log_path.to_string_lossy().to_string());

    assert!(init_logging("loud", &config).is_err());

    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(sheet = "Member Metadata", "Worksheet written");
    drop(guard);

    assert!(log_path.exists());
}
