/*!
 * Tests for application configuration
 */

use ytsubgen::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_withNoOverrides_shouldUseWorkerDefaults() {
    let config = Config::default();

    assert_eq!(config.backend.program, "uv");
    assert_eq!(
        config.backend.args,
        vec!["run".to_string(), "subtitle_backend/generate_subtitle.py".to_string()]
    );
    assert_eq!(config.backend.timeout_secs, 300);
    assert_eq!(config.scrape.timeout_secs, 30);
    assert!(config.scrape.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(config.source_language, None);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that partial JSON fills missing fields with defaults
#[test]
fn test_deserialize_withPartialJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str(
        r#"{
            "backend": { "program": "python3", "args": ["worker.py"] },
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    assert_eq!(config.backend.program, "python3");
    assert_eq!(config.backend.args, vec!["worker.py".to_string()]);
    assert_eq!(config.backend.timeout_secs, 300);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.scrape.timeout_secs, 30);
}

/// Test save and reload round-trip
#[test]
fn test_save_withDefaultConfig_shouldRoundTripThroughFile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.source_language = Some("en".to_string());
    config.save(&path).unwrap();

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

/// Test the missing-file fallback
#[test]
fn test_from_file_or_default_withMissingFile_shouldReturnDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let config = Config::from_file_or_default(&path).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that a malformed file is an error rather than silent defaults
#[test]
fn test_from_file_withMalformedJson_shouldReturnError() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}
