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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_API_KEY", "test-google-key");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FCTBIZ_ENV"));
}

#[test]
fn build_app_config_fails_without_google_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
        "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GOOGLE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
        "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("FCTBIZ_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FCTBIZ_BIND_ADDR"),
        "expected InvalidEnvVar(FCTBIZ_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.google_api_key, "test-google-key");
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.google_base_url, "https://maps.googleapis.com/maps/api/");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "fctbiz/0.1 (business-search)");
    assert_eq!(cfg.region, RegionConfig::default());
}

#[test]
fn build_app_config_overrides_region_center_and_radius() {
    let mut map = full_env();
    map.insert("FCTBIZ_CENTER_LAT", "9.1");
    map.insert("FCTBIZ_CENTER_LNG", "7.45");
    map.insert("FCTBIZ_RADIUS_METERS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.region.center, LatLng::new(9.1, 7.45));
    assert_eq!(cfg.region.radius_meters, 2500);
    assert_eq!(cfg.region.wildcard_category, "all");
}

#[test]
fn build_app_config_rejects_invalid_center() {
    let mut map = full_env();
    map.insert("FCTBIZ_CENTER_LAT", "north");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FCTBIZ_CENTER_LAT"),
        "expected InvalidEnvVar(FCTBIZ_CENTER_LAT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_radius() {
    let mut map = full_env();
    map.insert("FCTBIZ_RADIUS_METERS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FCTBIZ_RADIUS_METERS"),
        "expected InvalidEnvVar(FCTBIZ_RADIUS_METERS), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("FCTBIZ_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("FCTBIZ_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FCTBIZ_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FCTBIZ_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn app_config_debug_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-google-key"));
    assert!(rendered.contains("[redacted]"));
}
