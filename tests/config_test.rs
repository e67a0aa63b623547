use std::collections::HashMap;
use std::time::Duration;

use codefeed::config::Config;

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config_from(&[]);
    assert_eq!(config.bind_addr, "0.0.0.0:5000");
    assert!(config.gemini_api_key.is_none());
    assert_eq!(config.gemini_model, "gemini-2.5-pro");
    assert_eq!(config.upstream_timeout, Duration::from_secs(60));
}

#[test]
fn test_config_key_fallback_variable() {
    let config = config_from(&[("GOOGLE_AI_API_KEY", "google-key")]);
    assert_eq!(config.gemini_api_key.as_deref(), Some("google-key"));

    let config = config_from(&[
        ("GEMINI_API_KEY", "gemini-key"),
        ("GOOGLE_AI_API_KEY", "google-key"),
    ]);
    assert_eq!(config.gemini_api_key.as_deref(), Some("gemini-key"));
}

#[test]
fn test_config_empty_key_is_absent() {
    let config = config_from(&[("GEMINI_API_KEY", "")]);
    assert!(config.gemini_api_key.is_none());
}

#[test]
fn test_config_port_and_addr() {
    let config = config_from(&[("PORT", "8080")]);
    assert_eq!(config.bind_addr, "0.0.0.0:8080");

    let config = config_from(&[("PORT", "8080"), ("CODEFEED_ADDR", "127.0.0.1:3000")]);
    assert_eq!(config.bind_addr, "127.0.0.1:3000");

    let config = config_from(&[("PORT", "not-a-port")]);
    assert_eq!(config.bind_addr, "0.0.0.0:5000");
}

#[test]
fn test_config_overrides() {
    let config = config_from(&[
        ("GEMINI_MODEL", "gemini-2.5-flash"),
        ("CODEFEED_UPSTREAM_TIMEOUT_SECS", "5"),
    ]);
    assert_eq!(config.gemini_model, "gemini-2.5-flash");
    assert_eq!(config.upstream_timeout, Duration::from_secs(5));
}
