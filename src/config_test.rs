use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
    assert_eq!(config.proxy, ProxyLimits::default());
}

#[test]
fn explicit_values_are_used() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("GAME_HAVEN_API_ORIGIN", "https://store.example.com"),
        ("GAME_HAVEN_PROXY_TIMEOUT_SECS", "5"),
        ("GAME_HAVEN_PROXY_CONNECT_TIMEOUT_SECS", "2"),
        ("GAME_HAVEN_PROXY_MAX_BODY_BYTES", "4096"),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_origin, "https://store.example.com");
    assert_eq!(config.proxy, ProxyLimits { timeout_secs: 5, connect_timeout_secs: 2, max_body_bytes: 4096 });
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "not-a-port"), ("GAME_HAVEN_PROXY_TIMEOUT_SECS", "-1")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.proxy.timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn origin_trailing_slash_is_trimmed() {
    let config = config_from(&[("GAME_HAVEN_API_ORIGIN", "http://127.0.0.1:3001/")]).unwrap();
    assert_eq!(config.api_origin, "http://127.0.0.1:3001");
}

#[test]
fn blank_origin_uses_default() {
    let config = config_from(&[("GAME_HAVEN_API_ORIGIN", "   ")]).unwrap();
    assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
}

#[test]
fn origin_without_scheme_is_rejected() {
    assert_eq!(
        config_from(&[("GAME_HAVEN_API_ORIGIN", "localhost:3001")]).unwrap_err(),
        ConfigError::InvalidOrigin("localhost:3001".to_owned())
    );
    assert!(config_from(&[("GAME_HAVEN_API_ORIGIN", "https://")]).is_err());
}
