//! Tests for the validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&HoradricConfig::default()).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = HoradricConfig::default();
    config.provider.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.model"));
}

#[test]
fn catches_empty_api_key_env() {
    let mut config = HoradricConfig::default();
    config.provider.api_key_env.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.api_key_env"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = HoradricConfig::default();
    config.provider.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.base_url"));
}

#[test]
fn catches_zero_timeouts() {
    let mut config = HoradricConfig::default();
    config.provider.connect_timeout_secs = 0;
    config.provider.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.connect_timeout_secs"));
    assert!(err.contains("provider.request_timeout_secs"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = HoradricConfig::default();
    config.provider.temperature = Some(2.5);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
}

#[test]
fn accepts_boundary_temperatures() {
    let mut config = HoradricConfig::default();
    config.provider.temperature = Some(0.0);
    assert!(validate(&config).is_ok());
    config.provider.temperature = Some(2.0);
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = HoradricConfig::default();
    config.provider.max_output_tokens = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.max_output_tokens"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = HoradricConfig::default();
    config.provider.model.clear();
    config.assistant.wiki_url.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.model"));
    assert!(err.contains("assistant.wiki_url"));
    assert!(err.contains("; "));
}
