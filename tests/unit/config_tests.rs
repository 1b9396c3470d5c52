// ==========================
// tests/unit/config_tests.rs
// ==========================
//! Unit tests for the configuration module
use passgate_lib::config::{RateLimitSettings, Settings};
use passgate_lib::AppState;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_rate_limit_window() {
    let settings = RateLimitSettings {
        window_secs: 120,
        max_requests: 200,
    };
    assert_eq!(settings.window(), Duration::from_secs(120));
}

#[test]
fn test_load_yaml_config() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        "server:\n  host: 127.0.0.1\nrate_limit:\n  max_requests: 7\n",
    )
    .unwrap();

    let settings = Settings::load_from(&config_path).unwrap();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.rate_limit.max_requests, 7);
    assert_eq!(settings.rate_limit.window_secs, 900);
}

#[test]
fn test_state_from_settings_loads_blocklist() {
    let temp_dir = tempdir().unwrap();
    let list = temp_dir.path().join("common.txt");
    std::fs::write(&list, "hunter2\ntrustno1\n").unwrap();

    let mut settings = Settings::default();
    settings.policy.common_passwords_path = list;

    let state = AppState::from_settings(settings);
    assert_eq!(state.common_passwords.len(), 2);
    assert!(state.common_passwords.contains("TrustNo1"));
}

#[test]
fn test_state_without_blocklist_still_starts() {
    let temp_dir = tempdir().unwrap();
    let mut settings = Settings::default();
    settings.policy.common_passwords_path = temp_dir.path().join("missing.txt");

    let state = AppState::from_settings(settings);
    assert!(state.common_passwords.is_empty());
}
