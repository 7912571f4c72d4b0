//! Configuration validation.
//!
//! Every check pushes onto a shared list so one `ConfigError` reports all
//! problems at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::HoradricConfig;
use horadric_common::ConfigError;

use helpers::{validate_non_empty, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HoradricConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_provider(&mut errors, config);
    validate_non_empty(&mut errors, "assistant.wiki_url", &config.assistant.wiki_url);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_provider(errors: &mut Vec<String>, config: &HoradricConfig) {
    let provider = &config.provider;

    validate_non_empty(errors, "provider.model", &provider.model);
    validate_non_empty(errors, "provider.api_key_env", &provider.api_key_env);

    if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }

    if provider.connect_timeout_secs == 0 {
        errors.push("provider.connect_timeout_secs must be greater than 0".into());
    }
    if provider.request_timeout_secs == 0 {
        errors.push("provider.request_timeout_secs must be greater than 0".into());
    }

    if let Some(temperature) = provider.temperature {
        validate_range_f64(errors, "provider.temperature", temperature, 0.0, 2.0);
    }
    if provider.max_output_tokens == Some(0) {
        errors.push("provider.max_output_tokens must be greater than 0".into());
    }
}
