use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Pins the state directory so tests never depend on `$HOME`.
fn base_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("AFFLINK_STATE_DIR", "/tmp/afflink-test-state");
    m
}

#[test]
fn defaults_apply_when_vars_are_absent() {
    let map = base_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base, "https://api.pub.affiliates.one/api/v2");
    assert_eq!(cfg.locale, "zh-TW");
    assert_eq!(cfg.per_page, 500);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "afflink/0.1 (link-converter)");
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.state_dir, PathBuf::from("/tmp/afflink-test-state"));
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let mut map = base_env();
    map.insert("AFFLINK_API_BASE", "http://127.0.0.1:9000/api/v2/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base, "http://127.0.0.1:9000/api/v2");
}

#[test]
fn empty_api_base_is_rejected() {
    let mut map = base_env();
    map.insert("AFFLINK_API_BASE", "/");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFLINK_API_BASE"),
        "expected InvalidEnvVar(AFFLINK_API_BASE), got: {result:?}"
    );
}

#[test]
fn locale_override() {
    let mut map = base_env();
    map.insert("AFFLINK_LOCALE", "en");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.locale, "en");
}

#[test]
fn per_page_override() {
    let mut map = base_env();
    map.insert("AFFLINK_PER_PAGE", "100");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.per_page, 100);
}

#[test]
fn per_page_invalid() {
    let mut map = base_env();
    map.insert("AFFLINK_PER_PAGE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFLINK_PER_PAGE"),
        "expected InvalidEnvVar(AFFLINK_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn per_page_zero_is_rejected() {
    let mut map = base_env();
    map.insert("AFFLINK_PER_PAGE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFLINK_PER_PAGE"),
        "expected InvalidEnvVar(AFFLINK_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = base_env();
    map.insert("AFFLINK_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = base_env();
    map.insert("AFFLINK_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFLINK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(AFFLINK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_and_log_level_overrides() {
    let mut map = base_env();
    map.insert("AFFLINK_USER_AGENT", "custom-agent/2.0");
    map.insert("AFFLINK_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "debug");
}
